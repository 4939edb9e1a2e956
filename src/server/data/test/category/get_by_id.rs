use super::*;

/// Tests fetching an existing category.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_category_when_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let category = repo.get_by_id(created.id).await?;

    assert!(category.is_some());
    let category = category.unwrap();
    assert_eq!(category.id, created.id);
    assert_eq!(category.name, created.name);
    assert_eq!(category.created_at, created.created_at);

    Ok(())
}

/// Tests fetching an unknown category ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.get_by_id(999).await?;

    assert!(category.is_none());

    Ok(())
}
