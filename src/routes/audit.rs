use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::audit::AuditLogList,
    response::ApiResponse,
    routes::params::AuditLogQuery,
    services::audit_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_audit_logs))
}

#[utoipa::path(
    get,
    path = "/api/audit-logs",
    params(AuditLogQuery),
    responses(
        (status = 200, description = "Order audit trail, newest first", body = ApiResponse<AuditLogList>)
    ),
    tag = "Audit"
)]
pub async fn list_audit_logs(
    State(state): State<AppState>,
    Query(query): Query<AuditLogQuery>,
) -> Json<ApiResponse<AuditLogList>> {
    Json(audit_service::list_audit_logs(&state, query).await)
}
