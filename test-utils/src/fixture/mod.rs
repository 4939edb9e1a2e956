//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests and supply the default values used
//! by the factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let category = fixture::category::entity();
//!
//! let book = fixture::book::entity_builder()
//!     .title("Dune")
//!     .year(1965)
//!     .build();
//! ```

pub mod book;
pub mod category;

pub use book::{entity as book_entity, entity_builder as book_entity_builder};
pub use category::{entity as category_entity, entity_builder as category_entity_builder};

use chrono::{DateTime, TimeZone, Utc};

/// Fixed timestamp used as the default `created_at` of every fixture.
///
/// 2024-01-01T00:00:00Z
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}
