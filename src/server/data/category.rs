//! Category data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::category::{Category, CreateCategoryParams};

/// Repository providing database operations for categories.
pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new CategoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new category.
    ///
    /// No validation happens here; the unique constraint on `name` is enforced by the
    /// database and surfaces as a `DbErr` whose `sql_err()` is `UniqueConstraintViolation`.
    ///
    /// # Arguments
    /// - `params` - Name and creation timestamp
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(params.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Gets every category, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Gets a category by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - Category found
    /// - `Ok(None)` - No category with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Category::from_entity))
    }
}
