use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::shared::constants::ROOT_PARENT_ID;

const CATEGORY_COLUMNS: &str =
    "id, parent_id, name, description, display_order, deleted, created_at, updated_at";

/// Read access to category records.
///
/// Soft-deleted rows are invisible through every method. Empty results are
/// not errors; only an unknown id is.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>>;

    async fn get_by_id(&self, id: i64) -> Result<Category>;

    /// `None` (or the `0` sentinel) lists root categories
    async fn get_by_parent_id(&self, parent_id: Option<i64>) -> Result<Vec<Category>>;
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Category with id '{}' not found", id))
}

/// Postgres-backed store
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn get_all(&self) -> Result<Vec<Category>> {
        let sql = format!(
            "SELECT {} FROM categories WHERE deleted = FALSE ORDER BY display_order, id",
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn get_by_id(&self, id: i64) -> Result<Category> {
        let sql = format!(
            "SELECT {} FROM categories WHERE id = $1 AND deleted = FALSE",
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch category {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| not_found(id))
    }

    async fn get_by_parent_id(&self, parent_id: Option<i64>) -> Result<Vec<Category>> {
        // The parent_id foreign key rules out a stored 0, so roots are always NULL
        let parent = parent_id.filter(|&id| id != ROOT_PARENT_ID);
        let sql = format!(
            "SELECT {} FROM categories \
             WHERE parent_id IS NOT DISTINCT FROM $1 AND deleted = FALSE \
             ORDER BY display_order, id",
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&sql)
            .bind(parent)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories by parent {:?}: {:?}", parent_id, e);
                AppError::Database(e)
            })
    }
}

/// Fixed snapshot of categories held in memory
#[cfg(test)]
pub struct InMemoryCategoryStore {
    categories: Vec<Category>,
}

#[cfg(test)]
impl InMemoryCategoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    fn visible(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| !c.deleted)
    }
}

#[cfg(test)]
#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn get_all(&self) -> Result<Vec<Category>> {
        Ok(self.visible().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Category> {
        self.visible()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn get_by_parent_id(&self, parent_id: Option<i64>) -> Result<Vec<Category>> {
        let wanted = parent_id.filter(|&id| id != ROOT_PARENT_ID);
        Ok(self
            .visible()
            .filter(|c| c.parent() == wanted)
            .cloned()
            .collect())
    }
}
