//! SeaORM entity definitions for the book catalog.
//!
//! Each module maps one table. `category` and `book` are linked twice: directly through
//! `books.category_id`, and many-to-many through the `category_books` association table.

pub mod prelude;

pub mod book;
pub mod category;
pub mod category_book;
