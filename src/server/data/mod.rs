//! Database repository layer for the catalog.
//!
//! Repositories perform the database operations for each table and return domain models, so
//! entity models never leave this layer. They are generic over `ConnectionTrait` and work the
//! same on a pooled connection or inside a transaction opened by the service layer.

pub mod book;
pub mod category;

#[cfg(test)]
mod test;
