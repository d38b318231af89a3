mod common;

use cantina_orders::{catalog::Catalog, models::Order, store::OrderStore};

use common::{at, sample_order};

fn rebuild(order: &Order, id: String) -> Order {
    let catalog = Catalog::canteen();
    let customer = catalog.customer(order.customer_id()).unwrap();
    Order::new(id, customer, order.items().to_vec(), at(12, 0), None)
}

#[tokio::test]
async fn new_ids_follow_the_highest_suffix() -> anyhow::Result<()> {
    let store = OrderStore::new(vec![sample_order("order-007"), sample_order("order-002")]);
    let template = sample_order("template");

    let placed = store.create(|id| rebuild(&template, id)).await?;
    assert_eq!(placed.id(), "order-008");
    assert_eq!(store.len().await, 3);

    let empty = OrderStore::default();
    let first = empty.create(|id| rebuild(&template, id)).await?;
    assert_eq!(first.id(), "order-001");
    Ok(())
}

#[tokio::test]
async fn ids_keep_counting_past_four_billion() -> anyhow::Result<()> {
    let store = OrderStore::new(vec![sample_order("order-4294967295")]);
    let template = sample_order("template");

    let placed = store.create(|id| rebuild(&template, id)).await?;

    assert_eq!(placed.id(), "order-4294967296");
    Ok(())
}

#[tokio::test]
async fn exhausted_ids_are_an_error() {
    let last = format!("order-{}", u64::MAX);
    let store = OrderStore::new(vec![sample_order(&last)]);
    let template = sample_order("template");

    let result = store.create(|id| rebuild(&template, id)).await;

    assert!(result.is_err());
    assert_eq!(store.len().await, 1);
}
