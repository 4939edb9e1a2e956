use super::*;

/// Tests listing categories from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}

/// Tests that every inserted category is returned, ordered by ID.
///
/// Expected: Ok with all categories
#[tokio::test]
async fn returns_all_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_category_with_name(db, "fiction").await?;
    let second = factory::create_category_with_name(db, "history").await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, first.id);
    assert_eq!(categories[0].name, "fiction");
    assert_eq!(categories[1].id, second.id);
    assert_eq!(categories[1].name, "history");

    Ok(())
}
