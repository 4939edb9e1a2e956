use super::*;

/// Tests creating a new category.
///
/// Verifies that the repository inserts the row with the provided name and timestamp and
/// that the database assigns an ID.
///
/// Expected: Ok with category created
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "fiction".to_string(),
            created_at,
        })
        .await?;

    assert!(category.id > 0);
    assert_eq!(category.name, "fiction");
    assert_eq!(category.created_at, created_at);

    // Verify category exists in database
    let db_category = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(db_category.is_some());
    assert_eq!(db_category.unwrap().name, "fiction");

    Ok(())
}

/// Tests that a duplicate name is rejected by the unique constraint.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category_with_name(db, "fiction").await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .create(CreateCategoryParams {
            name: "fiction".to_string(),
            created_at: Utc::now(),
        })
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
