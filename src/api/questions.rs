use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{requested_page, AppState, PageQuery};
use crate::domain::{
    category_map, paginate, CategoryMap, FlexibleInt, NewQuestion, PageNumber, Question,
    QuestionId,
};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<FlexibleInt>,
    pub category: Option<FlexibleInt>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub question_created: String,
    pub created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct QuestionDeletedResponse {
    pub deleted: QuestionId,
    pub success: bool,
    pub total_questions: i64,
}

/// Non-blank text, or `None`.
fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// The store keeps these columns as integers; anything else cannot be written.
fn integer_scalar(field: &str, value: Option<FlexibleInt>) -> Result<Option<i64>, AppError> {
    match value {
        None => Ok(None),
        Some(v) => v.to_i64().map(Some).ok_or_else(|| {
            warn!("Rejecting non-integer {}: {:?}", field, v);
            AppError::Unprocessable(format!("{} must be an integer", field))
        }),
    }
}

/// `GET /questions?page=N`
///
/// A page past the end is a 404.
pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let page_number = requested_page(query);

    let questions = state.repo.list_questions().await?;
    let page = paginate(page_number, questions);
    if page.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = state.repo.list_categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: page.total,
        categories: category_map(&categories),
        questions: page.items,
    }))
}

/// `POST /questions`
pub async fn create_question(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<QuestionCreatedResponse>, AppError> {
    let Json(req) = body.map_err(|e| {
        warn!("Invalid create question body: {}", e.body_text());
        AppError::BadRequest("Invalid data provided.".into())
    })?;
    let page_number = requested_page(query);

    let (question, answer) = match (required_text(req.question), required_text(req.answer)) {
        (Some(q), Some(a)) => (q, a),
        _ => {
            return Err(AppError::BadRequest(
                "The question and answer fields cannot be empty.".into(),
            ))
        }
    };
    let category = integer_scalar("category", req.category)?;
    let difficulty = integer_scalar("difficulty", req.difficulty)?;

    let created = state
        .repo
        .insert_question(NewQuestion::new(question, answer, category, difficulty))
        .await
        .map_err(AppError::unprocessable)?;
    info!("Created question {}", created.id);

    let questions = state
        .repo
        .list_questions()
        .await
        .map_err(AppError::unprocessable)?;
    let page = paginate(page_number, questions);

    Ok(Json(QuestionCreatedResponse {
        success: true,
        question_created: created.question,
        created: created.id,
        questions: page.items,
        total_questions: page.total,
    }))
}

/// `POST /questions/search`
///
/// Zero matches on page 1 is a normal response with `total_questions == 0`.
/// Any later page with nothing on it is a 404.
pub async fn search_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(req) = body.map_err(|e| {
        warn!("Invalid search body: {}", e.body_text());
        AppError::BadRequest("bad request".into())
    })?;
    let page_number = requested_page(query);

    let term = req
        .search_term
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Search term cannot be empty.".into()))?;

    let matches = state
        .repo
        .search_questions(&term)
        .await
        .map_err(AppError::unprocessable)?;
    let page = paginate(page_number, matches);
    if page.is_empty() && page_number != PageNumber::FIRST {
        return Err(AppError::NotFound);
    }

    Ok(Json(SearchResponse {
        success: true,
        questions: page.items,
        total_questions: page.total,
    }))
}

/// `DELETE /questions/{id}`
pub async fn delete_question(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionDeletedResponse>, AppError> {
    let Path(question_id) = path.map_err(|_| AppError::NotFound)?;
    let id = QuestionId::new(question_id);

    if !state.repo.delete_question(id).await? {
        return Err(AppError::NotFound);
    }
    info!("Deleted question {}", id);

    let total_questions = state.repo.count_questions().await?;

    Ok(Json(QuestionDeletedResponse {
        deleted: id,
        success: true,
        total_questions,
    }))
}
