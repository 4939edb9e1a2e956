use sea_orm::{ConnectionTrait, DbErr, SqlErr};

use crate::{
    model::category::CategoryDto,
    server::{
        data::category::CategoryRepository,
        error::AppError,
        model::category::{Category, CreateCategoryParams},
        util::clock::Clock,
    },
};

pub struct CategoryService<'a, C: ConnectionTrait> {
    db: &'a C,
    clock: &'a dyn Clock,
}

impl<'a, C: ConnectionTrait> CategoryService<'a, C> {
    /// Creates a new CategoryService on a pooled connection or an open transaction.
    pub fn new(db: &'a C, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Lists every category.
    pub async fn get_all(&self) -> Result<Vec<CategoryDto>, AppError> {
        let categories = CategoryRepository::new(self.db).get_all().await?;

        Ok(categories.into_iter().map(Category::into_dto).collect())
    }

    /// Gets a single category, failing with `NotFound` for unknown IDs.
    pub async fn get_by_id(&self, id: i32) -> Result<CategoryDto, AppError> {
        let category = CategoryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(category_not_found(id)))?;

        Ok(category.into_dto())
    }

    /// Creates a category stamped with the current time.
    ///
    /// Uniqueness is left to the database constraint so that concurrent requests with the
    /// same name resolve to exactly one success and one `Conflict`.
    pub async fn create(&self, name: String) -> Result<CategoryDto, AppError> {
        if name.is_empty() {
            return Err(AppError::BadRequest("name must not be empty".to_string()));
        }

        let result = CategoryRepository::new(self.db)
            .create(CreateCategoryParams {
                name: name.clone(),
                created_at: self.clock.now(),
            })
            .await;

        match result {
            Ok(category) => {
                tracing::info!(id = category.id, name = %category.name, "created category");
                Ok(category.into_dto())
            }
            Err(err) if is_unique_violation(&err) => Err(AppError::Conflict(format!(
                "Category with name '{}' already exists",
                name
            ))),
            Err(err) => Err(err.into()),
        }
    }
}

/// Message used whenever a category ID does not resolve.
pub(crate) fn category_not_found(id: i32) -> String {
    format!("Category with id {} not found", id)
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
