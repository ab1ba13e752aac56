//! Seeding the default dataset through the repository.

use crate::db::seed::{DEFAULT_CATEGORIES, DEFAULT_QUESTIONS};
use crate::domain::{Category, CategoryId, NewQuestion};
use tracing::info;

use super::categories::insert_category_row;
use super::questions::insert_question_row;
use super::Repository;

impl Repository {
    /// Insert the default dataset into an empty store, in one transaction.
    ///
    /// Returns `false` without touching anything when categories already exist.
    ///
    /// # Errors
    /// Returns an error if any insert fails; nothing is written in that case.
    pub async fn seed_defaults(&self) -> Result<bool, sqlx::Error> {
        let existing = self.list_categories().await?;
        if !existing.is_empty() {
            info!("Skipping seed: {} categories already present", existing.len());
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;

        for (idx, kind) in DEFAULT_CATEGORIES.iter().enumerate() {
            let category = Category::new(CategoryId::new(idx as i64 + 1), *kind);
            insert_category_row(&mut *tx, &category).await?;
        }

        for (question, answer, category, difficulty) in DEFAULT_QUESTIONS.iter() {
            let new = NewQuestion::new(*question, *answer, Some(*category), Some(*difficulty));
            insert_question_row(&mut *tx, &new).await?;
        }

        tx.commit().await?;

        info!(
            "Seeded {} categories and {} questions",
            DEFAULT_CATEGORIES.len(),
            DEFAULT_QUESTIONS.len()
        );
        Ok(true)
    }
}
