use crate::{
    error::{AppError, AppResult},
    report::{DateRange, SalesSummary},
    response::ApiResponse,
    routes::params::ReportQuery,
    state::AppState,
};

pub async fn sales_summary(
    state: &AppState,
    query: ReportQuery,
) -> AppResult<ApiResponse<SalesSummary>> {
    if let (Some(from), Some(to)) = (query.from, query.to) {
        if from > to {
            return Err(AppError::BadRequest(format!(
                "Report range starts after it ends: {from} > {to}"
            )));
        }
    }

    let range = DateRange {
        from: query.from,
        to: query.to,
    };
    let orders = state.orders.list().await;
    let summary = SalesSummary::compute(&orders, range);

    tracing::debug!(
        total_sales = summary.total_sales,
        sold_orders = summary.sold_orders,
        "sales summary computed"
    );

    Ok(ApiResponse::single("Sales summary", summary))
}
