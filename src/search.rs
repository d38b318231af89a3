use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Order, OrderStatus};

/// Status tab plus free-text query, optionally narrowed to one customer's
/// history; every part that is set must match.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub query: Option<String>,
    pub customer_id: Option<String>,
}

impl OrderFilter {
    pub fn new(status: Option<OrderStatus>, query: Option<String>) -> Self {
        let query = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        Self {
            status,
            query,
            customer_id: None,
        }
    }

    /// Restricts the filter to orders placed by `customer_id`; blank ids are ignored.
    pub fn for_customer(mut self, customer_id: Option<String>) -> Self {
        self.customer_id = customer_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|status| order.status() != status) {
            return false;
        }
        if self
            .customer_id
            .as_deref()
            .is_some_and(|id| order.customer_id() != id)
        {
            return false;
        }
        match &self.query {
            Some(query) => matches_text(order, query),
            None => true,
        }
    }

    pub fn apply<'a, I>(&self, orders: I) -> Vec<Order>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        orders
            .into_iter()
            .filter(|o| self.matches(o))
            .cloned()
            .collect()
    }
}

// `query` is already lowercased.
fn matches_text(order: &Order, query: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query);
    contains(order.id())
        || contains(order.customer_name())
        || order
            .items()
            .iter()
            .any(|item| contains(&item.name) || contains(&item.description))
}

/// Order count per status, over the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub delivered: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn tally<'a, I>(orders: I) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut counts = Self::default();
        for order in orders {
            counts.all += 1;
            *counts.slot(order.status()) += 1;
        }
        counts
    }

    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Preparing => self.preparing,
            OrderStatus::Ready => self.ready,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Completed => self.completed,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    fn slot(&mut self, status: OrderStatus) -> &mut usize {
        match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Preparing => &mut self.preparing,
            OrderStatus::Ready => &mut self.ready,
            OrderStatus::Delivered => &mut self.delivered,
            OrderStatus::Completed => &mut self.completed,
            OrderStatus::Cancelled => &mut self.cancelled,
        }
    }
}
