pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use crate::db::Repository;
use crate::domain::PageNumber;
use crate::error::AppError;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::http::{header, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

/// `?page=N` on every paginated route.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Resolve the requested page, falling back to page 1 on anything unusable.
pub(crate) fn requested_page(query: Result<Query<PageQuery>, QueryRejection>) -> PageNumber {
    query
        .map(|Query(q)| PageNumber::parse_or_first(q.page.as_deref()))
        .unwrap_or_default()
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Fallback for routes keyed by a numeric id: a segment that is not an
/// integer never names a resource.
pub async fn id_route_fallback(path: Result<Path<i64>, PathRejection>) -> AppError {
    match path {
        Ok(_) => AppError::MethodNotAllowed,
        Err(_) => AppError::NotFound,
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health::health).fallback(method_not_allowed))
        .route(
            "/categories",
            get(categories::list_categories).fallback(method_not_allowed),
        )
        .route(
            "/categories/:category_id/questions",
            get(categories::list_category_questions).fallback(id_route_fallback),
        )
        .route(
            "/questions",
            get(questions::list_questions)
                .post(questions::create_question)
                .fallback(method_not_allowed),
        )
        .route(
            "/questions/search",
            post(questions::search_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions/:question_id",
            delete(questions::delete_question).fallback(id_route_fallback),
        )
        .route("/play", post(quizzes::play).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
