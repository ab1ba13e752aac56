mod common;

use axum::http::StatusCode;
use common::{post, request, seeded_app};
use serde_json::json;
use std::collections::HashSet;

#[tokio::test]
async fn test_play_returns_question_from_category() {
    let test_app = seeded_app().await;

    let (status, body) = post(
        &test_app.app,
        "/play",
        json!({"previous_questions": [], "quiz_category": {"type": "Science", "id": 1}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["category"], 1);
}

#[tokio::test]
async fn test_play_skips_previous_questions() {
    let test_app = seeded_app().await;

    // Science holds 16, 17 and 18
    let (status, body) = post(
        &test_app.app,
        "/play",
        json!({"previous_questions": [16, 18], "quiz_category": {"type": "Science", "id": "1"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 17);
}

#[tokio::test]
async fn test_play_full_round_never_repeats() {
    let test_app = seeded_app().await;
    let mut previous: Vec<i64> = Vec::new();

    loop {
        let (status, body) = post(
            &test_app.app,
            "/play",
            json!({"previous_questions": previous, "quiz_category": {"type": "click", "id": 0}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        match body["question"]["id"].as_i64() {
            Some(id) => {
                assert!(!previous.contains(&id));
                previous.push(id);
            }
            None => break,
        }
    }

    let seen: HashSet<i64> = previous.iter().copied().collect();
    assert_eq!(seen, (1..=19).collect::<HashSet<i64>>());
}

#[tokio::test]
async fn test_play_exhausted_round_has_no_question() {
    let test_app = seeded_app().await;
    let all: Vec<i64> = (1..=19).collect();

    let (status, body) = post(
        &test_app.app,
        "/play",
        json!({"previous_questions": all, "quiz_category": null}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body.get("question").is_none());
}

#[tokio::test]
async fn test_play_exhausted_category() {
    let test_app = seeded_app().await;

    let (status, body) = post(
        &test_app.app,
        "/play",
        json!({"previous_questions": [6, 7], "quiz_category": {"type": "Sports", "id": 6}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("question").is_none());
}

#[tokio::test]
async fn test_play_empty_object_uses_all_questions() {
    let test_app = seeded_app().await;

    let (status, body) = post(&test_app.app, "/play", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["question"]["id"].is_i64());
}

#[tokio::test]
async fn test_play_empty_body_is_422() {
    let test_app = seeded_app().await;

    let (status, body) = request(&test_app.app, "POST", "/play", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 422);
    assert_eq!(body["message"], "unprocessable");
}

#[tokio::test]
async fn test_play_store_failure_is_422() {
    let test_app = seeded_app().await;
    test_app.pool.close().await;

    let (status, body) = post(&test_app.app, "/play", json!({"previous_questions": []})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "unprocessable");
}
