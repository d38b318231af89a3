use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Label shown on the canteen screens.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Aguardando",
            OrderStatus::Preparing => "Em preparo",
            OrderStatus::Ready => "Pronto",
            OrderStatus::Delivered => "Entregue",
            OrderStatus::Completed => "Concluído",
            OrderStatus::Cancelled => "Cancelado",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Price in cents.
    pub price: i64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

/// A line of an order. Product data is copied at order time.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderItem {
    pub product_id: u32,
    pub name: String,
    pub description: String,
    pub unit_price: i64,
    pub quantity: u32,
    pub category: String,
}

impl OrderItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            unit_price: product.price,
            quantity,
            category: product.category.clone(),
        }
    }

    pub fn subtotal(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}

/// An order and its tracking timestamps.
///
/// Status, total and the milestone timestamps are only readable from outside the
/// crate; they change exclusively through [`crate::lifecycle::transition`].
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Order {
    id: String,
    customer_id: String,
    customer_name: String,
    items: Vec<OrderItem>,
    total: i64,
    status: OrderStatus,
    date: DateTime<Utc>,
    preparation_start_time: Option<DateTime<Utc>>,
    preparation_end_time: Option<DateTime<Utc>>,
    delivery_time: Option<DateTime<Utc>>,
    completion_time: Option<DateTime<Utc>>,
    notes: Option<String>,
}

impl Order {
    /// Creates a `pending` order; the total is fixed here from the item snapshots.
    pub fn new(
        id: impl Into<String>,
        customer: &Customer,
        items: Vec<OrderItem>,
        date: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        let total = items.iter().map(OrderItem::subtotal).sum();
        Self {
            id: id.into(),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            items,
            total,
            status: OrderStatus::Pending,
            date,
            preparation_start_time: None,
            preparation_end_time: None,
            delivery_time: None,
            completion_time: None,
            notes,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn preparation_start_time(&self) -> Option<DateTime<Utc>> {
        self.preparation_start_time
    }

    pub fn preparation_end_time(&self) -> Option<DateTime<Utc>> {
        self.preparation_end_time
    }

    pub fn delivery_time(&self) -> Option<DateTime<Utc>> {
        self.delivery_time
    }

    pub fn completion_time(&self) -> Option<DateTime<Utc>> {
        self.completion_time
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Minutes spent between entering `preparing` and `ready`, rounded.
    pub fn preparation_minutes(&self) -> Option<i64> {
        let start = self.preparation_start_time?;
        let end = self.preparation_end_time?;
        let secs = (end - start).num_seconds();
        Some((secs as f64 / 60.0).round() as i64)
    }

    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Stamps the milestone that belongs to `status`, keeping any earlier value.
    pub(crate) fn stamp_milestone(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        let slot = match status {
            OrderStatus::Preparing => &mut self.preparation_start_time,
            OrderStatus::Ready => &mut self.preparation_end_time,
            OrderStatus::Delivered => &mut self.delivery_time,
            OrderStatus::Completed | OrderStatus::Cancelled => &mut self.completion_time,
            OrderStatus::Pending => return,
        };
        slot.get_or_insert(now);
    }
}
