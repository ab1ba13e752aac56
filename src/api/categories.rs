use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use super::{requested_page, AppState, PageQuery};
use crate::domain::{category_map, paginate, CategoryId, CategoryMap, PageNumber, Question};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub total_questions: usize,
    pub current_category: String,
    pub questions: Vec<Question>,
}

/// `GET /categories`
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.repo.list_categories().await?;
    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(CategoriesResponse {
        categories: category_map(&categories),
        success: true,
    }))
}

/// `GET /categories/{id}/questions`
///
/// Store failures on this route are reported as 400. An empty category is a
/// success on page 1 and a 404 past it.
pub async fn list_category_questions(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let Path(category_id) = path.map_err(|_| AppError::NotFound)?;
    let page_number = requested_page(query);

    let category = state
        .repo
        .get_category(CategoryId::new(category_id))
        .await
        .map_err(AppError::bad_request)?
        .ok_or(AppError::NotFound)?;

    let questions = state
        .repo
        .list_questions_by_category(category.id)
        .await
        .map_err(AppError::bad_request)?;
    let page = paginate(page_number, questions);
    if page.is_empty() && page_number != PageNumber::FIRST {
        return Err(AppError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: page.total,
        current_category: category.kind,
        questions: page.items,
    }))
}
