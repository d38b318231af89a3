#![allow(dead_code)]

use std::sync::Arc;

use cantina_orders::{
    catalog::Catalog,
    lifecycle::{self, FixedClock},
    models::{Order, OrderItem, OrderStatus},
    notifier::BroadcastNotifier,
    seed,
    state::AppState,
    store::OrderStore,
};
use chrono::{DateTime, TimeZone, Utc};

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 10, hour, minute, 0).unwrap()
}

/// Two cheese sandwiches and an orange juice for João, placed at 10:30.
pub fn sample_order(id: &str) -> Order {
    let catalog = Catalog::canteen();
    let customer = catalog.customer("1").unwrap();
    let items = vec![
        OrderItem::from_product(catalog.product(1).unwrap(), 2),
        OrderItem::from_product(catalog.product(2).unwrap(), 1),
    ];
    Order::new(id, customer, items, at(10, 30), Some("sem cebola".into()))
}

pub fn drive(mut order: Order, steps: &[(OrderStatus, DateTime<Utc>)]) -> Order {
    for &(status, now) in steps {
        order = lifecycle::transition(&order, status, now).unwrap();
    }
    order
}

pub struct TestApp {
    pub state: AppState,
    pub clock: Arc<FixedClock>,
    pub notifier: BroadcastNotifier,
}

/// App state over the seeded demo orders with a clock frozen at 12:00.
pub fn seeded_app() -> TestApp {
    let catalog = Catalog::canteen();
    let orders = seed::demo_orders(&catalog).unwrap();
    app_with(orders, catalog)
}

pub fn app_with(orders: Vec<Order>, catalog: Catalog) -> TestApp {
    let clock = Arc::new(FixedClock::new(at(12, 0)));
    let notifier = BroadcastNotifier::new(16);
    let state = AppState::new(
        OrderStore::new(orders),
        catalog,
        clock.clone(),
        Arc::new(notifier.clone()),
    );
    TestApp {
        state,
        clock,
        notifier,
    }
}
