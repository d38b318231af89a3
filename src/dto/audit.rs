use serde::Serialize;
use utoipa::ToSchema;

use crate::audit::AuditEntry;

#[derive(Debug, Serialize, ToSchema)]
pub struct AuditLogList {
    pub items: Vec<AuditEntry>,
}
