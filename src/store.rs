use anyhow::anyhow;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    error::OrderError,
    lifecycle::{self, Clock},
    models::{Order, OrderStatus},
};

/// In-memory order collection, kept in insertion order.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
}

impl OrderStore {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    pub async fn list(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Order> {
        self.orders.read().await.iter().find(|o| o.id() == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }

    /// Builds an order with the next free `order-NNN` id and stores it.
    pub async fn create<F>(&self, build: F) -> anyhow::Result<Order>
    where
        F: FnOnce(String) -> Order,
    {
        let mut orders = self.orders.write().await;
        let order = build(next_id(&orders)?);
        orders.push(order.clone());
        Ok(order)
    }

    /// Applies a status transition. The status check, the clock read, the write
    /// and `on_commit` all happen under one write lock, so commits are observed
    /// in the order they were made.
    pub async fn transition<F>(
        &self,
        id: &str,
        new_status: OrderStatus,
        clock: &dyn Clock,
        on_commit: F,
    ) -> Result<Transition, OrderError>
    where
        F: FnOnce(&Transition),
    {
        let mut orders = self.orders.write().await;
        let slot = orders
            .iter_mut()
            .find(|o| o.id() == id)
            .ok_or_else(|| OrderError::OrderNotFound(id.to_string()))?;

        let previous = slot.status();
        let at = clock.now();
        let updated = lifecycle::transition(slot, new_status, at)?;
        *slot = updated.clone();

        let committed = Transition {
            previous,
            order: updated,
            at,
        };
        on_commit(&committed);
        Ok(committed)
    }
}

/// A committed status change.
#[derive(Debug, Clone)]
pub struct Transition {
    pub previous: OrderStatus,
    pub order: Order,
    pub at: DateTime<Utc>,
}

fn next_id(orders: &[Order]) -> anyhow::Result<String> {
    let highest = orders
        .iter()
        .filter_map(|o| o.id().strip_prefix("order-"))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    let next = highest
        .checked_add(1)
        .ok_or_else(|| anyhow!("order ids exhausted after order-{highest}"))?;
    Ok(format!("order-{next:03}"))
}
