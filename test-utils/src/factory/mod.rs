//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` builder for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let category = factory::create_category(&db).await?;
//! let book = factory::create_book(&db, category.id).await?;
//!
//! // Category, book and association row in one call
//! let (category, book) = factory::helpers::create_book_with_category(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let book = factory::book::BookFactory::new(&db, category.id)
//!     .title("Dune")
//!     .author("Herbert")
//!     .year(1965)
//!     .build()
//!     .await?;
//! ```

pub mod book;
pub mod category;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use book::create_book;
pub use category::{create_category, create_category_with_name};
