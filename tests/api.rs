mod common;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use cantina_orders::routes::create_app;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::seeded_app;

async fn call(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_check_reports_tracked_orders() {
    let app = create_app(seeded_app().state);

    let (status, body) = call(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Health check");
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["orders"], 5);
}

#[tokio::test]
async fn status_patch_follows_the_lifecycle() {
    let test = seeded_app();
    let app = create_app(test.state.clone());

    let (status, body) = call(
        app.clone(),
        Method::PATCH,
        "/api/orders/order-003/status",
        Some(json!({ "status": "ready" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["data"]["error"],
        "Order order-003 cannot move from pending to ready"
    );

    let (status, body) = call(
        app.clone(),
        Method::PATCH,
        "/api/orders/order-003/status",
        Some(json!({ "status": "preparing" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["order"]["status"], "preparing");
    assert_eq!(
        body["data"]["available_transitions"],
        json!(["ready", "cancelled"])
    );
    assert!(body["data"]["order"]["preparation_start_time"].is_string());

    let (status, body) = call(app, Method::GET, "/api/orders/order-003/transitions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["available"], json!(["ready", "cancelled"]));
}

#[tokio::test]
async fn unknown_status_or_order_is_rejected() {
    let app = create_app(seeded_app().state);

    let (status, _) = call(
        app.clone(),
        Method::PATCH,
        "/api/orders/order-003/status",
        Some(json!({ "status": "shipped" })),
    )
    .await;
    assert!(status.is_client_error());

    let (status, body) = call(app, Method::GET, "/api/orders/order-999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order order-999 not found");
}

#[tokio::test]
async fn order_list_applies_status_and_query() {
    let app = create_app(seeded_app().state);

    let (status, body) = call(
        app.clone(),
        Method::GET,
        "/api/orders?status=completed&q=maria&sort_order=asc",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["order-002", "order-004"]);
    assert_eq!(body["meta"]["total"], 2);

    let (_, body) = call(app.clone(), Method::GET, "/api/orders?q=feijoada", None).await;
    assert_eq!(body["data"]["items"], json!([]));

    let (_, body) = call(app, Method::GET, "/api/orders/counts", None).await;
    assert_eq!(body["data"]["all"], 5);
    assert_eq!(body["data"]["pending"], 1);
}

#[tokio::test]
async fn placing_an_order_returns_created() {
    let test = seeded_app();
    let app = create_app(test.state.clone());

    let (status, body) = call(
        app.clone(),
        Method::POST,
        "/api/orders",
        Some(json!({
            "customer_id": "3",
            "items": [{ "product_id": 12, "quantity": 3 }],
            "notes": "entregar na sala 4"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["order"]["id"], "order-006");
    assert_eq!(body["data"]["order"]["total"], 450);
    assert_eq!(body["data"]["order"]["status"], "pending");

    let (status, _) = call(
        app.clone(),
        Method::POST,
        "/api/orders",
        Some(json!({ "customer_id": "3", "items": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = call(app, Method::GET, "/api/audit-logs?action=order_placed", None).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["metadata"]["order_id"], "order-006");
}

#[tokio::test]
async fn menu_can_be_filtered_by_category() {
    let app = create_app(seeded_app().state);

    let (status, body) = call(app, Method::GET, "/api/products?category=bebidas", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Suco de Laranja", "Água Mineral", "Suco de Uva"]);
}

#[tokio::test]
async fn sales_summary_is_served() {
    let app = create_app(seeded_app().state);

    let (status, body) = call(app.clone(), Method::GET, "/api/reports/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Sales summary");
    assert_eq!(body["data"]["total_sales"], 4500);
    assert_eq!(body["data"]["average_order_value"], 1125);
    assert_eq!(body["data"]["counts"]["pending"], 1);
    assert_eq!(body["data"]["by_date"][0]["date"], "2025-04-10");

    let (status, body) = call(
        app.clone(),
        Method::GET,
        "/api/reports/summary?from=2025-04-12",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_sales"], 800);

    let (status, _) = call(
        app,
        Method::GET,
        "/api/reports/summary?from=2025-04-12&to=2025-04-10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn customer_history_and_far_pages_are_served() {
    let app = create_app(seeded_app().state);

    let (status, body) = call(app.clone(), Method::GET, "/api/orders?customer_id=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 2);

    let uri = format!("/api/orders?page={}", i64::MAX);
    let (status, body) = call(app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"], json!([]));
    assert_eq!(body["meta"]["total"], 5);
}
