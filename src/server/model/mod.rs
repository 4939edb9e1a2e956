//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, so entity types never reach the
//! HTTP layer and wire types never reach the database layer.

pub mod book;
pub mod category;
