//! Edit API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::fixtures;
use common::TestContext;

async fn server_with_capitals() -> (TestContext, axum_test::TestServer) {
    let ctx = TestContext::new();
    let server = ctx.server();
    server
        .post("/api/flashcards/mcq")
        .json(&fixtures::capitals())
        .await
        .assert_status(StatusCode::CREATED);
    (ctx, server)
}

async fn first_flashcard(server: &axum_test::TestServer) -> Value {
    let body: Value = server.get("/api/flashcards").await.json();
    body["flashcards"][0]["flashcard"].clone()
}

#[tokio::test]
async fn test_edit_choices_carries_answer_by_position() {
    let (_ctx, server) = server_with_capitals().await;

    let response = server
        .patch("/api/flashcards/1")
        .json(&json!({ "choices": ["Paris", "Rome", "Berlin", "Madrid"] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["flashcard"]["answer"], "Rome");
    assert_eq!(
        body["flashcard"]["question"]["choices"],
        json!(["Paris", "Rome", "Berlin", "Madrid"])
    );
}

#[tokio::test]
async fn test_edit_answer_index_against_current_choices() {
    let (_ctx, server) = server_with_capitals().await;

    let response = server
        .patch("/api/flashcards/1")
        .json(&json!({ "answer": "3" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["flashcard"]["answer"], "Berlin");
}

#[tokio::test]
async fn test_edit_answer_index_out_of_range_leaves_collection() {
    let (_ctx, server) = server_with_capitals().await;
    let before = first_flashcard(&server).await;

    let response = server
        .patch("/api/flashcards/1")
        .json(&json!({ "answer": "9" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "answer_out_of_range");
    assert_eq!(first_flashcard(&server).await, before);
}

#[tokio::test]
async fn test_edit_non_integer_answer_on_multiple_choice() {
    let (_ctx, server) = server_with_capitals().await;

    let response = server
        .patch("/api/flashcards/1")
        .json(&json!({ "answer": "London" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "answer_not_integer");
}

#[tokio::test]
async fn test_edit_choices_on_open_ended_is_type_mismatch() {
    let ctx = TestContext::new();
    let server = ctx.server();
    server
        .post("/api/flashcards/open")
        .json(&fixtures::open_ended("What is Rust?", "A language", &[]))
        .await;

    let response = server
        .patch("/api/flashcards/1")
        .json(&json!({ "choices": ["X"] }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "type_mismatch");
}

#[tokio::test]
async fn test_edit_without_fields() {
    let (_ctx, server) = server_with_capitals().await;

    let response = server.patch("/api/flashcards/1").json(&json!({})).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "no_fields_edited");
}

#[tokio::test]
async fn test_edit_open_ended_answer_and_tags() {
    let ctx = TestContext::new();
    let server = ctx.server();
    server
        .post("/api/flashcards/open")
        .json(&fixtures::open_ended("What is Rust?", "A language", &["cs"]))
        .await;

    let response = server
        .patch("/api/flashcards/1")
        .json(&json!({ "answer": "A systems language", "tags": ["rust", "cs"] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["flashcard"]["question"]["text"], "What is Rust?");
    assert_eq!(body["flashcard"]["answer"], "A systems language");
    assert_eq!(body["flashcard"]["tags"], json!(["cs", "rust"]));
}

#[tokio::test]
async fn test_edit_keeps_statistics() {
    let (_ctx, server) = server_with_capitals().await;
    server
        .post("/api/flashcards/1/test")
        .json(&fixtures::option("1"))
        .await
        .assert_status_ok();

    let response = server
        .patch("/api/flashcards/1")
        .json(&json!({ "question": "Which city is the UK capital?" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["flashcard"]["statistics"]["times_tested"], 1);
    assert_eq!(body["flashcard"]["statistics"]["times_correct"], 0);
    assert_eq!(body["flashcard"]["answer"], "London");
}

#[tokio::test]
async fn test_edit_into_existing_flashcard_is_conflict() {
    let ctx = TestContext::new();
    let server = ctx.server();
    server
        .post("/api/flashcards/open")
        .json(&fixtures::open_ended("one", "1", &[]))
        .await;
    server
        .post("/api/flashcards/open")
        .json(&fixtures::open_ended("two", "2", &[]))
        .await;

    let response = server
        .patch("/api/flashcards/2")
        .json(&json!({ "question": "one", "answer": "1" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "duplicate_flashcard");
}

#[tokio::test]
async fn test_edit_with_unchanged_values_is_conflict() {
    let (_ctx, server) = server_with_capitals().await;

    let response = server
        .patch("/api/flashcards/1")
        .json(&json!({ "answer": "2" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_edit_tags_only_is_conflict() {
    let (_ctx, server) = server_with_capitals().await;
    let before = first_flashcard(&server).await;

    let response = server
        .patch("/api/flashcards/1")
        .json(&json!({ "tags": ["europe"] }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "duplicate_flashcard");
    assert_eq!(first_flashcard(&server).await, before);
}

#[tokio::test]
async fn test_edit_choices_keeping_answer_text_is_conflict() {
    let (_ctx, server) = server_with_capitals().await;
    let before = first_flashcard(&server).await;

    let response = server
        .patch("/api/flashcards/1")
        .json(&json!({ "choices": ["Rome", "London", "Oslo"] }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(first_flashcard(&server).await, before);
}

#[tokio::test]
async fn test_edit_invalid_position() {
    let (_ctx, server) = server_with_capitals().await;

    let response = server
        .patch("/api/flashcards/5")
        .json(&json!({ "answer": "1" }))
        .await;

    response.assert_status_not_found();
}
