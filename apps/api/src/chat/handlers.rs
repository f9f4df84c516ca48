//! Axum route handlers for the Chat API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::chat::pipeline::ChatPipeline;
use crate::chat::prompts::GREETING;
use crate::errors::AppError;
use crate::models::chat::{ChatMessageRow, ChatSessionRow};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub session_id: Uuid,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_crisis: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMessagesResponse {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessageRow>,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub greeting: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /chat
///
/// Runs one message through the chat pipeline. The session extractor runs
/// before the body is read, so unauthenticated callers get 401 regardless of
/// payload.
pub async fn handle_chat(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) =
        body.map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;

    let message = request.message.unwrap_or_default();
    // A missing message is a 400 whatever `sessionId` holds.
    if message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let session_id = request
        .session_id
        .filter(|s| !s.is_empty())
        .map(|s| parse_session_id(&s))
        .transpose()?;

    let outcome = ChatPipeline::new(state.llm.as_ref(), state.chats.as_ref())
        .handle_message(user.user_id, &message, session_id)
        .await?;

    debug!(
        "Chat reply ready: session={}, language={}, crisis={}",
        outcome.session_id,
        outcome.language.code(),
        outcome.is_crisis
    );

    Ok(Json(ChatResponse {
        reply: outcome.reply,
        session_id: outcome.session_id,
        is_crisis: outcome.is_crisis,
    }))
}

/// GET /api/v1/chat/sessions
pub async fn handle_list_sessions(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<ChatSessionRow>>, AppError> {
    Ok(Json(state.chats.list_sessions(user.user_id).await?))
}

/// GET /api/v1/chat/sessions/:id/messages
pub async fn handle_session_messages(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<SessionMessagesResponse>, AppError> {
    let session_id = parse_session_id(&id)?;
    if state.chats.session_owner(session_id).await? != Some(user.user_id) {
        return Err(AppError::NotFound(format!(
            "Chat session {session_id} not found"
        )));
    }

    let messages = state.chats.messages(session_id).await?;
    Ok(Json(SessionMessagesResponse {
        session_id,
        messages,
    }))
}

/// GET /api/v1/chat/greeting
pub async fn handle_greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse { greeting: GREETING })
}

/// Session ids are UUIDs; anything else cannot name an existing session.
fn parse_session_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("Chat session {raw} not found")))
}
