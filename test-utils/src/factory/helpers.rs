//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep unique columns such as `categories.name` distinct across factory calls.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and one book linked to it.
///
/// The book carries the category in `category_id` and has its `category_books` row, the
/// same shape the service layer produces.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, book))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_book_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::book::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let book = crate::factory::book::create_book(db, category.id).await?;

    Ok((category, book))
}
