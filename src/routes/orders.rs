use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
};

use crate::{
    dto::orders::{
        CreateOrderRequest, OrderDetail, OrderList, TransitionList, UpdateOrderStatusRequest,
    },
    error::AppResult,
    response::ApiResponse,
    routes::params::OrderListQuery,
    search::StatusCounts,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/counts", get(order_counts))
        .route("/{id}", get(get_order))
        .route("/{id}/transitions", get(list_transitions))
        .route("/{id}/status", patch(update_order_status))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Filtered, paginated orders", body = ApiResponse<OrderList>),
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/counts",
    responses(
        (status = 200, description = "Number of orders per status", body = ApiResponse<StatusCounts>),
    ),
    tag = "Orders"
)]
pub async fn order_counts(State(state): State<AppState>) -> Json<ApiResponse<StatusCounts>> {
    Json(order_service::status_counts(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed in pending", body = ApiResponse<OrderDetail>),
        (status = 400, description = "Empty order, bad quantity, unknown customer or product"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderDetail>>)> {
    let resp = order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its next possible statuses", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let resp = order_service::get_order(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/transitions",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Statuses reachable from the current one", body = ApiResponse<TransitionList>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Orders"
)]
pub async fn list_transitions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<TransitionList>>> {
    let resp = order_service::available_transitions(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(("id" = String, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order moved to the requested status", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Transition not allowed from the current status"),
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let resp = order_service::update_order_status(&state, &id, payload).await?;
    Ok(Json(resp))
}
