//! Book domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::book::{BookDto, CreateBookDto};

/// A cataloged work owned by exactly one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub category_id: i32,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            category_id: entity.category_id,
            year: entity.year,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            category_id: self.category_id,
            year: self.year,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a book together with its category association.
#[derive(Debug, Clone)]
pub struct CreateBookParams {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Book fields as submitted by a client, before validation and timestamping.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub category_id: i32,
}

impl NewBook {
    /// Attaches the creation timestamp, producing insert parameters.
    pub fn into_params(self, created_at: DateTime<Utc>) -> CreateBookParams {
        CreateBookParams {
            title: self.title,
            author: self.author,
            year: self.year,
            category_id: self.category_id,
            created_at,
        }
    }
}

impl From<CreateBookDto> for NewBook {
    fn from(dto: CreateBookDto) -> Self {
        Self {
            title: dto.title,
            author: dto.author,
            year: dto.year,
            category_id: dto.category_id,
        }
    }
}
