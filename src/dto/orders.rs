use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    lifecycle,
    models::{Order, OrderStatus},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderItem {
    pub product_id: u32,
    pub quantity: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub items: Vec<CreateOrderItem>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

/// An order with what the tracking screen needs to render its actions.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDetail {
    pub order: Order,
    pub available_transitions: Vec<OrderStatus>,
    pub preparation_minutes: Option<i64>,
}

impl From<Order> for OrderDetail {
    fn from(order: Order) -> Self {
        Self {
            available_transitions: lifecycle::available_transitions(order.status()).to_vec(),
            preparation_minutes: order.preparation_minutes(),
            order,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransitionList {
    pub order_id: String,
    pub status: OrderStatus,
    pub available: Vec<OrderStatus>,
}
