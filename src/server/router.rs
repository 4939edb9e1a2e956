use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{
    timeout::{RequestBodyTimeoutLayer, TimeoutLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::server::{
    controller::{
        book::{create_book, list_books},
        category::{create_category, list_categories},
    },
    state::AppState,
};

/// Upper bound for reading a request and producing its response.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the application router with its state and middleware applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/categories", get(list_categories).post(create_category))
        .layer(RequestBodyTimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .with_state(state)
}
