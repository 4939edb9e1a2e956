use super::*;

/// Tests creating a book together with its association row.
///
/// Verifies the book row carries the category in `category_id` and exactly one
/// `category_books` row references it with the same category.
///
/// Expected: Ok with book and association created
#[tokio::test]
async fn creates_book_with_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = BookRepository::new(db);
    let book = repo.create(params(category.id)).await?;

    assert!(book.id > 0);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Herbert");
    assert_eq!(book.year, 1965);
    assert_eq!(book.category_id, category.id);

    let links = CategoryBook::find()
        .filter(entity::category_book::Column::BookId.eq(book.id))
        .all(db)
        .await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].category_id, category.id);

    Ok(())
}

/// Tests that a book referencing an unknown category is rejected by the foreign key.
///
/// Expected: Err and no book persisted
#[tokio::test]
async fn fails_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let result = repo.create(params(999)).await;

    assert!(result.is_err());
    assert_eq!(Book::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failed association insert inside a transaction leaves no orphaned book.
///
/// The association table is left out of the schema so the second insert fails after the
/// book row has been written.
///
/// Expected: Err and the book insert rolled back
#[tokio::test]
async fn rolls_back_book_when_association_fails() -> Result<(), DbErr> {
    // No CategoryBook table: the second insert of `create` fails.
    let test = TestBuilder::new()
        .with_table(Category)
        .with_table(Book)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let txn = db.begin().await?;
    let result = BookRepository::new(&txn).create(params(category.id)).await;
    assert!(result.is_err());
    txn.rollback().await?;

    assert_eq!(Book::find().count(db).await?, 0);

    Ok(())
}
