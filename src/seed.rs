use anyhow::{Context, anyhow};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::{
    catalog::Catalog,
    lifecycle::{self, Clock, FixedClock},
    models::{Order, OrderItem, OrderStatus},
};

struct HistoricalOrder {
    id: &'static str,
    customer_id: &'static str,
    items: &'static [(u32, u32)],
    status: OrderStatus,
    date: &'static str,
}

const HISTORY: [HistoricalOrder; 5] = [
    HistoricalOrder {
        id: "order-001",
        customer_id: "1",
        items: &[(1, 2), (2, 1)],
        status: OrderStatus::Completed,
        date: "2025-04-10T10:30:00",
    },
    HistoricalOrder {
        id: "order-002",
        customer_id: "2",
        items: &[(5, 1), (11, 1)],
        status: OrderStatus::Completed,
        date: "2025-04-10T11:15:00",
    },
    HistoricalOrder {
        id: "order-003",
        customer_id: "1",
        items: &[(8, 1)],
        status: OrderStatus::Pending,
        date: "2025-04-12T12:45:00",
    },
    HistoricalOrder {
        id: "order-004",
        customer_id: "2",
        items: &[(10, 2), (7, 2)],
        status: OrderStatus::Completed,
        date: "2025-04-11T13:20:00",
    },
    HistoricalOrder {
        id: "order-005",
        customer_id: "1",
        items: &[(6, 1), (3, 2)],
        status: OrderStatus::Cancelled,
        date: "2025-04-09T15:05:00",
    },
];

/// Steps taken to reach a historical status, with minutes after the order date.
fn path_to(status: OrderStatus) -> &'static [(OrderStatus, i64)] {
    match status {
        OrderStatus::Pending => &[],
        OrderStatus::Preparing => &[(OrderStatus::Preparing, 5)],
        OrderStatus::Ready => &[(OrderStatus::Preparing, 5), (OrderStatus::Ready, 15)],
        OrderStatus::Delivered => &[
            (OrderStatus::Preparing, 5),
            (OrderStatus::Ready, 15),
            (OrderStatus::Delivered, 20),
        ],
        OrderStatus::Completed => &[
            (OrderStatus::Preparing, 5),
            (OrderStatus::Ready, 15),
            (OrderStatus::Delivered, 20),
            (OrderStatus::Completed, 25),
        ],
        OrderStatus::Cancelled => &[(OrderStatus::Cancelled, 3)],
    }
}

/// Historical canteen orders, replayed through the lifecycle so every timestamp
/// comes from a real transition.
pub fn demo_orders(catalog: &Catalog) -> anyhow::Result<Vec<Order>> {
    HISTORY
        .iter()
        .map(|entry| replay(catalog, entry))
        .collect()
}

fn replay(catalog: &Catalog, entry: &HistoricalOrder) -> anyhow::Result<Order> {
    let customer = catalog
        .customer(entry.customer_id)
        .ok_or_else(|| anyhow!("unknown customer {}", entry.customer_id))?;
    let items = entry
        .items
        .iter()
        .map(|&(product_id, quantity)| {
            catalog
                .product(product_id)
                .map(|p| OrderItem::from_product(p, quantity))
                .ok_or_else(|| anyhow!("unknown product {product_id}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let date = parse_local(entry.date)?;
    let clock = FixedClock::new(date);
    let mut order = Order::new(entry.id, customer, items, date, None);

    for &(status, minutes) in path_to(entry.status) {
        clock.set(date + Duration::minutes(minutes));
        order = lifecycle::transition(&order, status, clock.now())?;
    }

    Ok(order)
}

fn parse_local(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .with_context(|| format!("invalid seed date {raw}"))?;
    Ok(naive.and_utc())
}
