use std::sync::Arc;

use crate::{
    audit::AuditLog,
    catalog::Catalog,
    lifecycle::Clock,
    notifier::Notifier,
    store::OrderStore,
};

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<OrderStore>,
    pub catalog: Arc<Catalog>,
    pub audit: Arc<AuditLog>,
    pub clock: Arc<dyn Clock>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(
        orders: OrderStore,
        catalog: Catalog,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            orders: Arc::new(orders),
            catalog: Arc::new(catalog),
            audit: Arc::new(AuditLog::new()),
            clock,
            notifier,
        }
    }
}
