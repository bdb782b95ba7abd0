// src/routes/mod.rs
pub mod chat;

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::SharedState;
use chat::chat_handler;

pub fn create_router() -> Router<SharedState> {
    // The header set the browser frontend relies on: any origin, JSON
    // bodies, POST plus pre-flight. The layer answers OPTIONS itself with
    // 200 and an empty body.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
