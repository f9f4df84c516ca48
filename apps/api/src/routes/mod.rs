pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::content::handlers as content;
use crate::journal::handlers as journal;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat
        .route("/chat", post(chat::handle_chat))
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/chat/greeting", get(chat::handle_greeting))
        .route("/api/v1/chat/sessions", get(chat::handle_list_sessions))
        .route(
            "/api/v1/chat/sessions/:id/messages",
            get(chat::handle_session_messages),
        )
        // Journal
        .route(
            "/api/v1/journal",
            get(journal::handle_list_entries).post(journal::handle_create_entry),
        )
        // Static content
        .route(
            "/api/v1/content/health-advice",
            get(content::handle_health_advice),
        )
        .route(
            "/api/v1/content/health-advice/:id",
            get(content::handle_health_advice_topic),
        )
        .route(
            "/api/v1/content/mental-peace",
            get(content::handle_mental_peace),
        )
        .route(
            "/api/v1/content/mental-peace/:id",
            get(content::handle_mental_peace_topic),
        )
        .route(
            "/api/v1/content/daily-insight",
            get(content::handle_daily_insight),
        )
        .with_state(state)
}
