#![allow(dead_code)]

use axum::http::StatusCode;
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use trivia_api::api::{self, AppState};
use trivia_api::db::init_db;
use trivia_api::{Question, QuestionId, Repository};

pub struct TestApp {
    pub app: axum::Router,
    pub repo: Arc<Repository>,
    pub pool: SqlitePool,
    _temp: TempDir,
}

/// Fresh database holding the default seed dataset.
pub async fn seeded_app() -> TestApp {
    let test_app = empty_app().await;
    test_app.repo.seed_defaults().await.expect("seed failed");
    test_app
}

/// Fresh database with the schema but no rows.
pub async fn empty_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool.clone()));
    let app = api::create_router(AppState::new(repo.clone()));

    TestApp {
        app,
        repo,
        pool,
        _temp: temp_dir,
    }
}

pub async fn request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    request(app, "GET", uri, None).await
}

pub async fn post(
    app: &axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    request(app, "POST", uri, Some(body)).await
}

pub fn question_ids(body: &serde_json::Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

pub async fn find_question(repo: &Repository, id: i64) -> Option<Question> {
    repo.list_questions()
        .await
        .unwrap()
        .into_iter()
        .find(|q| q.id == QuestionId::new(id))
}
