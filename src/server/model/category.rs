//! Category domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::category::CategoryDto;

/// A named grouping of books. Names are unique across all categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// Set once at insert time, never mutated.
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a category.
///
/// `created_at` is supplied by the caller so the timestamp comes from the application
/// clock rather than the database.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub created_at: DateTime<Utc>,
}
