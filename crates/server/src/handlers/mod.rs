mod quotes;

use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/quotes", post(quotes::create_quote))
        .route("/quotes", get(quotes::list_quotes))
        .route("/quotes/:id", put(quotes::update_quote))
        .route("/quotes/:id", delete(quotes::delete_quote))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unauthenticated liveness probe: 200, no body.
async fn health() -> StatusCode {
    StatusCode::OK
}
