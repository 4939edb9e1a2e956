//! Category fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Test Category";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Category"`
/// - created_at: `fixture::default_created_at()`
///
/// # Example
///
/// ```rust,ignore
/// let category = fixture::category::entity();
/// assert_eq!(category.name, "Test Category");
/// ```
pub fn entity() -> category::Model {
    entity_builder().build()
}

/// Creates a category entity builder for customization.
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder::default()
}

/// Builder for customized category entity models.
pub struct CategoryEntityBuilder {
    id: i32,
    name: String,
    created_at: DateTime<Utc>,
}

impl Default for CategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            created_at: super::default_created_at(),
        }
    }
}

impl CategoryEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and returns the category entity model.
    pub fn build(self) -> category::Model {
        category::Model {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}
