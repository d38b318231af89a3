use crate::{
    audit::{ORDER_PLACED, ORDER_STATUS_UPDATE, log_audit},
    dto::orders::{
        CreateOrderRequest, OrderDetail, OrderList, TransitionList, UpdateOrderStatusRequest,
    },
    error::{AppError, AppResult, OrderError},
    lifecycle,
    models::{Order, OrderItem},
    notifier::StatusChanged,
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    search::{OrderFilter, StatusCounts},
    state::AppState,
    store::Transition,
};

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let filter =
        OrderFilter::new(query.status, query.q.clone()).for_customer(query.customer_id.clone());
    let all = state.orders.list().await;
    let mut orders = filter.apply(&all);

    match query.sort_order.unwrap_or_default() {
        SortOrder::Asc => orders.sort_by_key(|o| o.date()),
        SortOrder::Desc => orders.sort_by_key(|o| std::cmp::Reverse(o.date())),
    }

    let (page, limit, total, items) = query.pagination().paginate(orders);
    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

pub async fn status_counts(state: &AppState) -> ApiResponse<StatusCounts> {
    let orders = state.orders.list().await;
    ApiResponse::single("Order counts", StatusCounts::tally(&orders))
}

pub async fn get_order(state: &AppState, id: &str) -> AppResult<ApiResponse<OrderDetail>> {
    let order = find(state, id).await?;
    Ok(ApiResponse::single("Order found", OrderDetail::from(order)))
}

pub async fn available_transitions(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<TransitionList>> {
    let order = find(state, id).await?;
    let data = TransitionList {
        order_id: order.id().to_string(),
        status: order.status(),
        available: lifecycle::available_transitions(order.status()).to_vec(),
    };
    Ok(ApiResponse::single("Available transitions", data))
}

pub async fn update_order_status(
    state: &AppState,
    id: &str,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<OrderDetail>> {
    let notifier = state.notifier.as_ref();
    let committed = state
        .orders
        .transition(id, payload.status, state.clock.as_ref(), |done| {
            notifier.notify(StatusChanged {
                order_id: done.order.id().to_string(),
                new_status: done.order.status(),
                timestamp: done.at,
            });
        })
        .await;

    let Transition {
        previous,
        order,
        at,
    } = match committed {
        Ok(done) => done,
        Err(err) => {
            tracing::info!(
                order_id = %id,
                requested = %payload.status,
                error = %err,
                "status update rejected"
            );
            return Err(err.into());
        }
    };

    log_audit(
        &state.audit,
        ORDER_STATUS_UPDATE,
        Some("orders"),
        Some(serde_json::json!({
            "order_id": order.id(),
            "from": previous,
            "to": order.status(),
        })),
        at,
    )
    .await;

    tracing::debug!(
        order_id = %order.id(),
        from = %previous,
        to = %order.status(),
        "order status updated"
    );

    Ok(ApiResponse::single("Order updated", OrderDetail::from(order)))
}

pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<OrderDetail>> {
    if payload.items.is_empty() {
        return Err(AppError::BadRequest("Order has no items".into()));
    }

    let customer = state
        .catalog
        .customer(&payload.customer_id)
        .ok_or_else(|| {
            AppError::BadRequest(format!("Unknown customer {}", payload.customer_id))
        })?;

    let mut items = Vec::with_capacity(payload.items.len());
    for line in &payload.items {
        if line.quantity < 1 {
            return Err(AppError::BadRequest("Order has invalid quantity".into()));
        }
        let product = state.catalog.product(line.product_id).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown product {}", line.product_id))
        })?;
        items.push(OrderItem::from_product(product, line.quantity));
    }

    let now = state.clock.now();
    let notes = payload.notes.filter(|n| !n.trim().is_empty());
    let order = state
        .orders
        .create(|id| Order::new(id, customer, items, now, notes))
        .await?;

    log_audit(
        &state.audit,
        ORDER_PLACED,
        Some("orders"),
        Some(serde_json::json!({
            "order_id": order.id(),
            "customer_id": order.customer_id(),
            "total": order.total(),
        })),
        now,
    )
    .await;

    tracing::info!(order_id = %order.id(), total = order.total(), "order placed");

    Ok(ApiResponse::single("Order placed", OrderDetail::from(order)))
}

async fn find(state: &AppState, id: &str) -> Result<Order, OrderError> {
    state
        .orders
        .get(id)
        .await
        .ok_or_else(|| OrderError::OrderNotFound(id.to_string()))
}
