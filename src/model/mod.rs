//! Wire-level data transfer objects.
//!
//! These types define the JSON shapes accepted and returned by the HTTP API. Server-side
//! domain models convert into them at the controller boundary.

pub mod api;
pub mod book;
pub mod category;
