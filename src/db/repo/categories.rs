//! Category operations for the repository.

use crate::domain::{Category, CategoryId};
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::{Executor, Row};

use super::Repository;

fn category_from_row(row: &SqliteRow) -> Category {
    Category {
        id: CategoryId::new(row.get("id")),
        kind: row.get("type"),
    }
}

/// Insert a category with a fixed id on any executor (pool or transaction).
pub(super) async fn insert_category_row<'e, E>(
    executor: E,
    category: &Category,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
        .bind(category.id.as_i64())
        .bind(category.kind.as_str())
        .execute(executor)
        .await?;
    Ok(())
}

impl Repository {
    /// All categories ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }

    /// Look up a single category.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, sqlx::Error> {
        let row = sqlx::query("SELECT id, type FROM categories WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(category_from_row))
    }
}
