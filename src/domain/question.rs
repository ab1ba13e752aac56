//! Trivia question records.

use crate::domain::QuestionId;
use serde::Serialize;

/// A stored question, serialized as `{id, question, answer, category, difficulty}`.
///
/// `category` and `difficulty` are kept exactly as they were submitted; either
/// may be null when the creator omitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// A question that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Option<i64>,
        difficulty: Option<i64>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Attach the id assigned by the store.
    pub fn with_id(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
