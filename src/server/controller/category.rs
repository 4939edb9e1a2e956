use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::category::CreateCategoryDto,
    server::{
        error::AppError, service::category::CategoryService, state::AppState,
        util::json::JsonBody,
    },
};

/// List all categories.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - JSON array of every category
/// - `500 Internal Server Error` - Database error
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db, state.clock.as_ref());

    let categories = service.get_all().await?;

    Ok((StatusCode::OK, Json(categories)))
}

/// Create a new category.
///
/// # Arguments
/// - `state` - Application state containing the database connection and clock
/// - `payload` - `{ "name": string }`
///
/// # Returns
/// - `200 OK` - The created category
/// - `400 Bad Request` - Undecodable body or empty name
/// - `409 Conflict` - A category with this name already exists
/// - `500 Internal Server Error` - Database error
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db, state.clock.as_ref());

    let category = service.create(payload.name).await?;

    Ok((StatusCode::OK, Json(category)))
}
