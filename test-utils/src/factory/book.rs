//! Book factory for creating test book entities.
//!
//! By default the factory also inserts the matching `category_books` row, mirroring how
//! books are created by the application.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let book = BookFactory::new(&db, category.id)
///     .title("Dune")
///     .author("Herbert")
///     .year(1965)
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::book::Model,
    link_category: bool,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Category the book belongs to
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let entity = fixture::book::entity_builder()
            .category_id(category_id)
            .build();

        Self {
            db,
            entity,
            link_category: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.entity.author = author.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.entity.year = year;
        self
    }

    /// Skips inserting the `category_books` association row.
    ///
    /// Useful for tests that need a book without its association.
    pub fn without_association(mut self) -> Self {
        self.link_category = false;
        self
    }

    /// Builds and inserts the book, plus its association row unless disabled.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        let book = entity::book::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.entity.title),
            author: ActiveValue::Set(self.entity.author),
            category_id: ActiveValue::Set(self.entity.category_id),
            year: ActiveValue::Set(self.entity.year),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await?;

        if self.link_category {
            entity::category_book::ActiveModel {
                category_id: ActiveValue::Set(book.category_id),
                book_id: ActiveValue::Set(book.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(book)
    }
}

/// Creates a book with default values in the given category.
pub async fn create_book(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db, category_id).build().await
}
