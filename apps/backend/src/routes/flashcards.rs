//! Flashcard endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use quickcache_core::{Answer, Flashcard, MultipleChoiceQuestion, Question, QuickCache};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/flashcards
pub async fn list(State(state): State<AppState>) -> Json<FlashcardListResponse> {
    let model = state.model.lock().await;
    Json(list_view(&model))
}

/// POST /api/flashcards/find
///
/// Narrows the displayed list; positions in later commands refer to it.
pub async fn find(
    State(state): State<AppState>,
    Json(request): Json<FindRequest>,
) -> Result<Json<FlashcardListResponse>> {
    let filter = FlashcardFilter {
        keywords: request.keywords,
        tags: parse_tags(request.tags)?,
    };

    let mut model = state.model.lock().await;
    model.find(filter);

    let response = list_view(&model);
    tracing::info!(
        "Showing {} of {} flashcards",
        response.flashcards.len(),
        response.total
    );
    Ok(Json(response))
}

fn list_view(model: &QuickCache) -> FlashcardListResponse {
    let flashcards: Vec<FlashcardEntry> = model
        .view()
        .into_iter()
        .enumerate()
        .map(|(i, flashcard)| FlashcardEntry {
            position: i + 1,
            flashcard: flashcard.clone(),
        })
        .collect();

    FlashcardListResponse {
        flashcards,
        total: model.len(),
    }
}

/// POST /api/flashcards/open
pub async fn add_open(
    State(state): State<AppState>,
    Json(request): Json<AddOpenEndedRequest>,
) -> Result<(StatusCode, Json<FlashcardResponse>)> {
    let flashcard = Flashcard::new(
        Question::open_ended(request.question)?,
        Answer::new(request.answer)?,
        parse_tags(request.tags)?,
    )?;

    add(&state, flashcard).await
}

/// POST /api/flashcards/mcq
pub async fn add_mcq(
    State(state): State<AppState>,
    Json(request): Json<AddMultipleChoiceRequest>,
) -> Result<(StatusCode, Json<FlashcardResponse>)> {
    let question = MultipleChoiceQuestion::from_strs(request.question, &request.choices)?;
    let flashcard = Flashcard::multiple_choice(question, &request.answer, parse_tags(request.tags)?)?;

    add(&state, flashcard).await
}

async fn add(state: &AppState, flashcard: Flashcard) -> Result<(StatusCode, Json<FlashcardResponse>)> {
    let added = flashcard.clone();
    state.apply(|model| model.add(flashcard)).await?;

    tracing::info!("Added flashcard: {}", added.question().value());
    Ok((StatusCode::CREATED, Json(FlashcardResponse { flashcard: added })))
}

/// PATCH /api/flashcards/:position
pub async fn edit(
    State(state): State<AppState>,
    Path(position): Path<usize>,
    Json(edit): Json<EditDescriptor>,
) -> Result<Json<FlashcardResponse>> {
    let flashcard = state.apply(|model| model.edit(position, &edit)).await?;
    Ok(Json(FlashcardResponse { flashcard }))
}

/// DELETE /api/flashcards/:position
pub async fn delete(
    State(state): State<AppState>,
    Path(position): Path<usize>,
) -> Result<Json<DeleteResponse>> {
    let removed = state.apply(|model| model.delete(position)).await?;
    Ok(Json(DeleteResponse {
        deleted: vec![removed],
    }))
}

/// POST /api/flashcards/delete
///
/// Deletes every flashcard carrying all of the given tags.
pub async fn delete_by_tags(
    State(state): State<AppState>,
    Json(request): Json<DeleteByTagsRequest>,
) -> Result<Json<DeleteResponse>> {
    let tags = parse_tags(request.tags)?;
    if tags.is_empty() {
        return Err(ApiError::BadRequest("at least one tag is required".to_string()));
    }

    let deleted = state
        .apply(|model| model.delete_matching(|c| tags.iter().all(|t| c.matches_tag(t))))
        .await?;

    tracing::info!("Deleted {} flashcards by tag", deleted.len());
    Ok(Json(DeleteResponse { deleted }))
}

/// POST /api/flashcards/:position/test
pub async fn test(
    State(state): State<AppState>,
    Path(position): Path<usize>,
    Json(submission): Json<TestSubmission>,
) -> Result<Json<TestResponse>> {
    let outcome = state
        .apply(|model| model.test(position, &submission))
        .await?;

    Ok(Json(TestResponse {
        is_correct: outcome.is_correct,
        submitted: outcome.submitted,
        expected: outcome.updated.answer().to_string(),
        flashcard: outcome.updated,
    }))
}

/// GET /api/flashcards/:position/stats
pub async fn stats(
    State(state): State<AppState>,
    Path(position): Path<usize>,
) -> Result<Json<StatsReport>> {
    let model = state.model.lock().await;
    Ok(Json(model.stats(position)?))
}
