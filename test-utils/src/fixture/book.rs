//! Book fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::book;

/// Default test book title.
pub const DEFAULT_TITLE: &str = "Test Book";

/// Default test book author.
pub const DEFAULT_AUTHOR: &str = "Test Author";

/// Default publication year.
pub const DEFAULT_YEAR: i32 = 2000;

/// Default category ID the book points at.
pub const DEFAULT_CATEGORY_ID: i32 = 1;

/// Creates a book entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Test Book"`
/// - author: `"Test Author"`
/// - category_id: `1`
/// - year: `2000`
/// - created_at: `fixture::default_created_at()`
pub fn entity() -> book::Model {
    entity_builder().build()
}

/// Creates a book entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let book = fixture::book::entity_builder()
///     .title("Dune")
///     .author("Herbert")
///     .year(1965)
///     .build();
/// ```
pub fn entity_builder() -> BookEntityBuilder {
    BookEntityBuilder::default()
}

/// Builder for customized book entity models.
pub struct BookEntityBuilder {
    id: i32,
    title: String,
    author: String,
    category_id: i32,
    year: i32,
    created_at: DateTime<Utc>,
}

impl Default for BookEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            category_id: DEFAULT_CATEGORY_ID,
            year: DEFAULT_YEAR,
            created_at: super::default_created_at(),
        }
    }
}

impl BookEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and returns the book entity model.
    pub fn build(self) -> book::Model {
        book::Model {
            id: self.id,
            title: self.title,
            author: self.author,
            category_id: self.category_id,
            year: self.year,
            created_at: self.created_at,
        }
    }
}
