//! Application state shared across all request handlers.
//!
//! Holds the database pool and the clock. The state is built once at startup and cloned
//! into each request through Axum's state extraction; both fields are cheap to clone.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::util::clock::Clock;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by every request.
    pub db: DatabaseConnection,

    /// Source of `created_at` timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `clock` - Clock used for creation timestamps
    pub fn new(db: DatabaseConnection, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }
}
