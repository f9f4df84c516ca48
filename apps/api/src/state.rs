use std::sync::Arc;

use crate::auth::SessionProvider;
use crate::chat::store::ChatStore;
use crate::journal::cache::JournalCache;
use crate::journal::store::JournalStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every collaborator sits behind a trait object so tests can run without
/// PostgreSQL, Redis or the Gemini API.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide Gemini client, built once at startup.
    pub llm: Arc<dyn TextGenerator>,
    pub sessions: Arc<dyn SessionProvider>,
    pub chats: Arc<dyn ChatStore>,
    pub journal: Arc<dyn JournalStore>,
    pub journal_cache: Arc<dyn JournalCache>,
    pub session_cookie_name: String,
}
