use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use utoipa::ToSchema;

use crate::models::OrderStatus;

/// Emitted after an order changes status.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatusChanged {
    pub order_id: String,
    pub new_status: OrderStatus,
    pub timestamp: DateTime<Utc>,
}

/// Fire-and-forget sink for status changes. Delivery is not guaranteed.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: StatusChanged);
}

#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<StatusChanged>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StatusChanged> {
        self.tx.subscribe()
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, event: StatusChanged) {
        // Err only means nobody is listening.
        if self.tx.send(event).is_err() {
            tracing::trace!("status change dropped, no subscribers");
        }
    }
}

/// Logs every event from `rx` until the channel closes.
pub async fn log_status_changes(mut rx: broadcast::Receiver<StatusChanged>) {
    loop {
        match rx.recv().await {
            Ok(event) => tracing::info!(
                order_id = %event.order_id,
                status = %event.new_status,
                label = event.new_status.label(),
                at = %event.timestamp,
                "order status updated"
            ),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "status notifications lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
