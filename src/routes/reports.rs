use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    error::AppResult, report::SalesSummary, response::ApiResponse, routes::params::ReportQuery,
    services::report_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(sales_summary))
}

#[utoipa::path(
    get,
    path = "/api/reports/summary",
    params(ReportQuery),
    responses(
        (status = 200, description = "Sales totals, per day and per category", body = ApiResponse<SalesSummary>),
        (status = 400, description = "Range starts after it ends"),
    ),
    tag = "Reports"
)]
pub async fn sales_summary(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ApiResponse<SalesSummary>>> {
    let resp = report_service::sales_summary(&state, query).await?;
    Ok(Json(resp))
}
