use axum::{Router, routing::get};

use crate::state::AppState;

pub mod audit;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;
pub mod reports;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/orders", orders::router())
        .nest("/products", products::router())
        .nest("/audit-logs", audit::router())
        .nest("/reports", reports::router())
}

/// Health check, API and docs with state bound; middleware is layered by the caller.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .with_state(state)
}
