use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::book::CreateBookDto,
    server::{
        error::AppError, service::book::BookService, state::AppState, util::json::JsonBody,
    },
};

/// List all books.
///
/// Category data is not expanded; each book carries only its `category_id`.
///
/// # Returns
/// - `200 OK` - JSON array of every book
/// - `500 Internal Server Error` - Database error
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db, state.clock.as_ref());

    let books = service.get_all().await?;

    Ok((StatusCode::OK, Json(books)))
}

/// Create a new book in an existing category.
///
/// # Arguments
/// - `state` - Application state containing the database connection and clock
/// - `payload` - `{ "title", "author", "year", "category_id" }`
///
/// # Returns
/// - `200 OK` - The created book
/// - `400 Bad Request` - Undecodable body, empty title/author or non-positive year
/// - `404 Not Found` - `category_id` does not resolve; the message names the id
/// - `500 Internal Server Error` - Database error
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db, state.clock.as_ref());

    let book = service.create(payload.into()).await?;

    Ok((StatusCode::OK, Json(book)))
}
