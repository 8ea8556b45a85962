//! Test fixtures and factory functions for creating request bodies.

use std::path::PathBuf;

use serde_json::{json, Value};
use uuid::Uuid;

/// Data file path inside a fresh scratch directory.
pub fn unique_data_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("quickcache-test-{}", Uuid::new_v4()))
        .join("quickcache.json")
}

pub fn open_ended(question: &str, answer: &str, tags: &[&str]) -> Value {
    json!({
        "question": question,
        "answer": answer,
        "tags": tags,
    })
}

pub fn multiple_choice(question: &str, choices: &[&str], answer: &str, tags: &[&str]) -> Value {
    json!({
        "question": question,
        "choices": choices,
        "answer": answer,
        "tags": tags,
    })
}

/// The capitals MCQ used across tests, answer "London".
pub fn capitals() -> Value {
    multiple_choice(
        "Capital of the UK?",
        &["Paris", "London", "Berlin", "Madrid"],
        "2",
        &["geo"],
    )
}

pub fn find(keywords: &[&str], tags: &[&str]) -> Value {
    json!({ "keywords": keywords, "tags": tags })
}

pub fn delete_by_tags(tags: &[&str]) -> Value {
    json!({ "tags": tags })
}

pub fn answer(text: &str) -> Value {
    json!({ "answer": text })
}

pub fn option(token: &str) -> Value {
    json!({ "option": token })
}
