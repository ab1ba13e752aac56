//! Question operations for the repository.

use crate::domain::{CategoryId, NewQuestion, Question, QuestionId};
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::{Executor, Row};

use super::Repository;

fn question_from_row(row: &SqliteRow) -> Question {
    Question {
        id: QuestionId::new(row.get("id")),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}

/// Insert a question on any executor (pool or transaction) and return its id.
pub(super) async fn insert_question_row<'e, E>(
    executor: E,
    new: &NewQuestion,
) -> Result<QuestionId, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
    )
    .bind(new.question.as_str())
    .bind(new.answer.as_str())
    .bind(new.category)
    .bind(new.difficulty)
    .execute(executor)
    .await?;

    Ok(QuestionId::new(result.last_insert_rowid()))
}

impl Repository {
    /// All questions ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    /// Questions in one category, ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?
            ORDER BY id ASC
            "#,
        )
        .bind(category.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    ///
    /// Matching happens in Rust so case folding covers all of Unicode, and
    /// the term is taken literally.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        let questions = self.list_questions().await?;

        Ok(questions
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect())
    }

    /// Total number of stored questions.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count_questions(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert a question and return it with its assigned id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_question(&self, new: NewQuestion) -> Result<Question, sqlx::Error> {
        let id = insert_question_row(&self.pool, &new).await?;
        Ok(new.with_id(id))
    }

    /// Hard-delete a question. Returns `false` if no row had that id.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_question(&self, id: QuestionId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Candidate questions for a quiz round: one category, or all of them.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn quiz_pool(
        &self,
        category: Option<CategoryId>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        match category {
            Some(category) => self.list_questions_by_category(category).await,
            None => self.list_questions().await,
        }
    }
}
