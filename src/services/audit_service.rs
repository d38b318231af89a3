use crate::{
    dto::audit::AuditLogList,
    response::{ApiResponse, Meta},
    routes::params::AuditLogQuery,
    state::AppState,
};

pub async fn list_audit_logs(state: &AppState, query: AuditLogQuery) -> ApiResponse<AuditLogList> {
    let action = query.action.as_deref().filter(|a| !a.is_empty());
    let entries = state.audit.list(action).await;

    let (page, limit, total, items) = query.pagination().paginate(entries);
    ApiResponse::success(
        "Audit logs",
        AuditLogList { items },
        Some(Meta::new(page, limit, total)),
    )
}
