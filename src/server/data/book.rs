//! Book data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::book::{Book, CreateBookParams};

/// Repository providing database operations for books and their category associations.
pub struct BookRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    /// Creates a new BookRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a book and its `(category_id, book_id)` association row.
    ///
    /// The book row is written first so the association can reference its ID. The two
    /// inserts are only atomic when `db` is a transaction; the service layer always calls
    /// this inside one.
    ///
    /// # Arguments
    /// - `params` - Book fields, owning category and creation timestamp
    ///
    /// # Returns
    /// - `Ok(Book)` - The created book with its generated ID
    /// - `Err(DbErr)` - Database error during either insert
    pub async fn create(&self, params: CreateBookParams) -> Result<Book, DbErr> {
        let book = entity::book::ActiveModel {
            title: ActiveValue::Set(params.title),
            author: ActiveValue::Set(params.author),
            category_id: ActiveValue::Set(params.category_id),
            year: ActiveValue::Set(params.year),
            created_at: ActiveValue::Set(params.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::category_book::ActiveModel {
            category_id: ActiveValue::Set(book.category_id),
            book_id: ActiveValue::Set(book.id),
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(book))
    }

    /// Gets every book, ordered by ID. Category data is not loaded.
    pub async fn get_all(&self) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }
}
