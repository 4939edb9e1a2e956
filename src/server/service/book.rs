use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::book::BookDto,
    server::{
        data::book::BookRepository,
        error::AppError,
        model::book::{Book, NewBook},
        service::category::{category_not_found, CategoryService},
        util::clock::Clock,
    },
};

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Lists every book without expanding category data.
    pub async fn get_all(&self) -> Result<Vec<BookDto>, AppError> {
        let books = BookRepository::new(self.db).get_all().await?;

        Ok(books.into_iter().map(Book::into_dto).collect())
    }

    /// Creates a book and its category association as one unit.
    ///
    /// Runs inside a transaction: the category lookup, the book insert and the association
    /// insert either all commit or, on any early return, the dropped transaction rolls back
    /// so no orphaned book remains. An unknown category fails with `NotFound` before
    /// anything is written.
    pub async fn create(&self, new_book: NewBook) -> Result<BookDto, AppError> {
        validate(&new_book)?;

        let category_id = new_book.category_id;
        let txn = self.db.begin().await?;

        CategoryService::new(&txn, self.clock)
            .get_by_id(category_id)
            .await?;

        let book = BookRepository::new(&txn)
            .create(new_book.into_params(self.clock.now()))
            .await
            .map_err(|err| classify_insert_error(err, category_id))?;

        txn.commit().await?;

        tracing::info!(id = book.id, category_id, "created book");

        Ok(book.into_dto())
    }
}

fn validate(book: &NewBook) -> Result<(), AppError> {
    if book.title.is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }
    if book.author.is_empty() {
        return Err(AppError::BadRequest("author must not be empty".to_string()));
    }
    if book.year <= 0 {
        return Err(AppError::BadRequest(format!(
            "year must be a positive integer, got {}",
            book.year
        )));
    }

    Ok(())
}

/// A foreign key failure at insert time means the category vanished after the lookup.
fn classify_insert_error(err: DbErr, category_id: i32) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            AppError::NotFound(category_not_found(category_id))
        }
        _ => AppError::DbErr(err),
    }
}
