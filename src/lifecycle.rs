//! Order status lifecycle.
//!
//! ```text
//! pending    -> preparing, cancelled
//! preparing  -> ready, cancelled
//! ready      -> delivered, cancelled
//! delivered  -> completed
//! completed  -> (terminal)
//! cancelled  -> (terminal)
//! ```
//!
//! Entering `preparing`, `ready` and `delivered` stamps `preparation_start_time`,
//! `preparation_end_time` and `delivery_time`; entering either terminal state stamps
//! `completion_time`. A stamp is never overwritten.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

use crate::{
    error::OrderError,
    models::{Order, OrderStatus},
};

/// Statuses reachable in one step from `status`.
pub fn available_transitions(status: OrderStatus) -> &'static [OrderStatus] {
    match status {
        OrderStatus::Pending => &[OrderStatus::Preparing, OrderStatus::Cancelled],
        OrderStatus::Preparing => &[OrderStatus::Ready, OrderStatus::Cancelled],
        OrderStatus::Ready => &[OrderStatus::Delivered, OrderStatus::Cancelled],
        OrderStatus::Delivered => &[OrderStatus::Completed],
        OrderStatus::Completed | OrderStatus::Cancelled => &[],
    }
}

pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    available_transitions(from).contains(&to)
}

/// Moves `order` to `new_status`, returning the updated copy.
///
/// The input is never modified; on error the caller keeps the order exactly as it was.
pub fn transition(
    order: &Order,
    new_status: OrderStatus,
    now: DateTime<Utc>,
) -> Result<Order, OrderError> {
    if !can_transition(order.status(), new_status) {
        return Err(OrderError::InvalidTransition {
            order_id: order.id().to_string(),
            from: order.status(),
            to: new_status,
        });
    }

    let mut updated = order.clone();
    updated.set_status(new_status);
    updated.stamp_milestone(new_status, now);
    Ok(updated)
}

/// Source of transition timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    current: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(at),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
