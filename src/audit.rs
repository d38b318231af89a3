use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use utoipa::ToSchema;
use uuid::Uuid;

pub const ORDER_PLACED: &str = "order_placed";
pub const ORDER_STATUS_UPDATE: &str = "order_status_update";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuditEntry {
    pub id: Uuid,
    pub action: String,
    pub resource: Option<String>,
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct AuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries newest first, optionally restricted to one action. Entries with the
    /// same timestamp keep reverse insertion order.
    pub async fn list(&self, action: Option<&str>) -> Vec<AuditEntry> {
        let mut entries: Vec<_> = self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .filter(|e| action.is_none_or(|a| e.action == a))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }
}

pub async fn log_audit(
    log: &AuditLog,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
    at: DateTime<Utc>,
) {
    let entry = AuditEntry {
        id: Uuid::new_v4(),
        action: action.to_string(),
        resource: resource.map(str::to_string),
        metadata,
        created_at: at,
    };
    tracing::debug!(action, id = %entry.id, "audit entry recorded");
    log.entries.write().await.push(entry);
}
