//! Axum route handlers for the Journal API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::auth::{CurrentUser, MaybeUser};
use crate::errors::AppError;
use crate::journal::actions::{create_journal_entry, get_journal_entries, NewJournalEntry};
use crate::models::journal::JournalEntryRow;
use crate::state::AppState;

/// POST /api/v1/journal
pub async fn handle_create_entry(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<NewJournalEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<JournalEntryRow>), AppError> {
    let Json(entry) =
        body.map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;

    let created = create_journal_entry(
        state.journal.as_ref(),
        state.journal_cache.as_ref(),
        user.user_id,
        entry,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/journal
pub async fn handle_list_entries(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Result<Json<Vec<JournalEntryRow>>, AppError> {
    let entries = get_journal_entries(
        state.journal.as_ref(),
        state.journal_cache.as_ref(),
        user.map(|u| u.user_id),
    )
    .await?;
    Ok(Json(entries))
}
