use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::AppState;
use crate::domain::{CategoryId, FlexibleInt, Question, QuestionId};
use crate::engine::QuizSelector;
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct PlayRequest {
    pub previous_questions: Option<Vec<QuestionId>>,
    pub quiz_category: Option<QuizCategory>,
}

/// `{id, type}` as the front end sends it. `id` 0 selects every category.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: Option<FlexibleInt>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlayResponse {
    /// Absent once the round has used every question in scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    pub success: bool,
}

impl PlayRequest {
    fn into_selector(self) -> Result<QuizSelector, AppError> {
        let category = match self.quiz_category.and_then(|c| c.id) {
            None => None,
            Some(id) => {
                let id = id.to_i64().ok_or_else(|| {
                    warn!("Rejecting non-integer quiz category id: {:?}", id);
                    AppError::Unprocessable("quiz category id must be an integer".into())
                })?;
                Some(CategoryId::new(id))
            }
        };

        Ok(QuizSelector::new(
            self.previous_questions.unwrap_or_default(),
            category,
        ))
    }
}

/// `POST /play`
pub async fn play(
    State(state): State<AppState>,
    body: Result<Json<PlayRequest>, JsonRejection>,
) -> Result<Json<PlayResponse>, AppError> {
    let Json(req) = body.map_err(|e| {
        warn!("Invalid play body: {}", e.body_text());
        AppError::Unprocessable(e.body_text())
    })?;
    let selector = req.into_selector()?;

    let pool = state
        .repo
        .quiz_pool(selector.category())
        .await
        .map_err(AppError::unprocessable)?;
    let question = selector.choose(pool, &mut rand::thread_rng());

    Ok(Json(PlayResponse {
        question,
        success: true,
    }))
}
