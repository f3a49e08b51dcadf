//! HTTP route configuration

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::catalog::handlers::{self, AppState};
use crate::chat;

/// Build the application router over the injected store handle.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/hotels", get(handlers::list_services))
        .route("/chat", post(chat::handlers::chat))
        .route("/accommodation", post(handlers::create_accommodation))
        .route(
            "/accommodation/:name",
            put(handlers::update_accommodation).delete(handlers::delete_accommodation),
        )
        .route("/cities", get(handlers::list_cities))
        .route("/recommendations", get(handlers::recommendations))
        .route("/hotel_details", get(handlers::hotel_details))
        .route("/price_range", get(handlers::price_range))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
