//! One inbound chat message, start to finish.
//!
//! Steps run strictly in sequence because each depends on the previous result:
//! 1. Validate the message and the caller's claim on `session_id`
//! 2. Crisis keyword scan (short-circuits; the model is never called)
//! 3. Language detection (fails open to English)
//! 4. Amharic → English translation (fails open to the original text)
//! 5. Load the most recent history and call the chat model
//! 6. English → Amharic translation of the reply (fails open)
//! 7. Persist the raw user message and the final reply
//!
//! Two concurrent requests on one session are not coordinated: each reads
//! history before the other appends, so interleaved exchanges can miss each
//! other's context.

use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::crisis::{find_crisis_keyword, CRISIS_RESPONSE};
use crate::chat::language::{detect_language, translate_or_original, Language};
use crate::chat::prompts::{FALLBACK_REPLY, SYSTEM_PROMPT};
use crate::chat::store::ChatStore;
use crate::errors::AppError;
use crate::llm_client::{ChatTurn, LlmError, TextGenerator, TurnRole};
use crate::models::chat::{ChatMessageRow, MessageRole};

/// Number of persisted messages replayed to the model as history.
pub const HISTORY_LIMIT: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub reply: String,
    pub session_id: Uuid,
    pub is_crisis: bool,
    pub language: Language,
}

pub struct ChatPipeline<'a> {
    llm: &'a dyn TextGenerator,
    store: &'a dyn ChatStore,
}

impl<'a> ChatPipeline<'a> {
    pub fn new(llm: &'a dyn TextGenerator, store: &'a dyn ChatStore) -> Self {
        Self { llm, store }
    }

    pub async fn handle_message(
        &self,
        user_id: Uuid,
        message: &str,
        session_id: Option<Uuid>,
    ) -> Result<ChatOutcome, AppError> {
        if message.trim().is_empty() {
            return Err(AppError::Validation("Message is required".to_string()));
        }

        if let Some(id) = session_id {
            self.ensure_owned(user_id, id).await?;
        }

        if let Some(keyword) = find_crisis_keyword(message) {
            info!("Crisis keyword '{keyword}' matched for user {user_id}; skipping model");
            let session_id = self
                .persist(user_id, session_id, message, CRISIS_RESPONSE)
                .await?;
            return Ok(ChatOutcome {
                reply: CRISIS_RESPONSE.to_string(),
                session_id,
                is_crisis: true,
                language: Language::English,
            });
        }

        let language = detect_language(self.llm, message).await;
        let processed = match language {
            Language::Amharic => translate_or_original(self.llm, message, Language::English).await,
            Language::English => message.to_string(),
        };

        let history = match session_id {
            Some(id) => to_history(&self.store.recent_messages(id, HISTORY_LIMIT).await?),
            None => Vec::new(),
        };

        let reply = match self
            .llm
            .generate(Some(SYSTEM_PROMPT), &history, &processed)
            .await
        {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) | Err(LlmError::EmptyContent) => {
                warn!("Chat model returned no text; using fallback reply");
                FALLBACK_REPLY.to_string()
            }
            Err(e) => return Err(AppError::Llm(e)),
        };

        let reply = match language {
            Language::Amharic => translate_or_original(self.llm, &reply, Language::Amharic).await,
            Language::English => reply,
        };

        let session_id = self.persist(user_id, session_id, message, &reply).await?;

        Ok(ChatOutcome {
            reply,
            session_id,
            is_crisis: false,
            language,
        })
    }

    async fn ensure_owned(&self, user_id: Uuid, session_id: Uuid) -> Result<(), AppError> {
        match self.store.session_owner(session_id).await? {
            Some(owner) if owner == user_id => Ok(()),
            _ => Err(AppError::NotFound(format!(
                "Chat session {session_id} not found"
            ))),
        }
    }

    /// Appends the exchange, creating the session with it when there is none yet.
    async fn persist(
        &self,
        user_id: Uuid,
        session_id: Option<Uuid>,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<Uuid, AppError> {
        let session_id = match session_id {
            Some(id) => {
                self.store
                    .append_exchange(id, user_text, assistant_text)
                    .await?;
                id
            }
            None => {
                self.store
                    .start_session(user_id, user_text, assistant_text)
                    .await?
                    .id
            }
        };

        info!("Stored chat exchange in session {session_id}");
        Ok(session_id)
    }
}

/// Maps stored messages onto model turns; `assistant` becomes `model`.
pub fn to_history(messages: &[ChatMessageRow]) -> Vec<ChatTurn> {
    messages
        .iter()
        .map(|m| ChatTurn {
            role: match m.role() {
                MessageRole::Assistant => TurnRole::Model,
                MessageRole::User => TurnRole::User,
            },
            text: m.content.clone(),
        })
        .collect()
}
