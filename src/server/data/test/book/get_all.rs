use super::*;

/// Tests listing books from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let books = repo.get_all().await?;

    assert!(books.is_empty());

    Ok(())
}

/// Tests that books from every category are returned, ordered by ID.
///
/// Expected: Ok with all books
#[tokio::test]
async fn returns_books_across_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (fiction, dune) = factory::helpers::create_book_with_category(db).await?;
    let history = factory::create_category(db).await?;
    let spqr = factory::book::BookFactory::new(db, history.id)
        .title("SPQR")
        .author("Beard")
        .year(2015)
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let books = repo.get_all().await?;

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, dune.id);
    assert_eq!(books[0].category_id, fiction.id);
    assert_eq!(books[1].id, spqr.id);
    assert_eq!(books[1].title, "SPQR");
    assert_eq!(books[1].year, 2015);
    assert!(books.iter().all(|b| b.year > 0 && !b.title.is_empty() && !b.author.is_empty()));

    Ok(())
}
