//! In-memory stand-ins for the database, cache, auth provider and Gemini.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::auth::SessionProvider;
use crate::chat::store::ChatStore;
use crate::config::DEFAULT_SESSION_COOKIE;
use crate::journal::cache::JournalCache;
use crate::journal::store::JournalStore;
use crate::llm_client::{ChatTurn, LlmError, TextGenerator};
use crate::models::chat::{ChatMessageRow, ChatSessionRow, MessageRole};
use crate::models::journal::JournalEntryRow;
use crate::models::user::Session;
use crate::state::AppState;

/// Deterministic, strictly increasing timestamps.
fn tick(n: usize) -> DateTime<Utc> {
    Utc.timestamp_opt(1_760_000_000, 0).unwrap() + Duration::seconds(n as i64)
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: Option<String>,
    pub history: Vec<ChatTurn>,
    pub prompt: String,
}

type Responder = Box<dyn Fn(&RecordedCall) -> Result<String, LlmError> + Send + Sync>;

pub struct ScriptedGenerator {
    responder: Responder,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGenerator {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&RecordedCall) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        system: Option<&str>,
        history: &[ChatTurn],
        prompt: &str,
    ) -> Result<String, LlmError> {
        let call = RecordedCall {
            system: system.map(String::from),
            history: history.to_vec(),
            prompt: prompt.to_string(),
        };
        let result = (self.responder)(&call);
        self.calls.lock().unwrap().push(call);
        result
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Chat persistence
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryChatStore {
    sessions: Mutex<Vec<ChatSessionRow>>,
    messages: Mutex<Vec<ChatMessageRow>>,
    fail_writes: AtomicBool,
}

impl MemoryChatStore {
    /// Makes every later write fail, as a lost database connection would.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("connection reset by peer"));
        }
        Ok(())
    }

    pub fn seed_session(&self, user_id: Uuid) -> Uuid {
        let mut sessions = self.sessions.lock().unwrap();
        let row = ChatSessionRow {
            id: Uuid::new_v4(),
            user_id,
            created_at: tick(sessions.len()),
        };
        sessions.push(row.clone());
        row.id
    }

    pub fn seed_exchange(&self, session_id: Uuid, user_text: &str, assistant_text: &str) {
        let mut messages = self.messages.lock().unwrap();
        for (role, text) in [
            (MessageRole::User, user_text),
            (MessageRole::Assistant, assistant_text),
        ] {
            let n = messages.len();
            messages.push(ChatMessageRow {
                id: Uuid::new_v4(),
                session_id,
                role: role.as_str().to_string(),
                content: text.to_string(),
                created_at: tick(n),
            });
        }
    }

    pub fn all_messages(&self, session_id: Uuid) -> Vec<ChatMessageRow> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.session_id == session_id)
            .cloned()
            .collect()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn owner_of(&self, session_id: Uuid) -> Option<Uuid> {
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == session_id)
            .map(|s| s.user_id)
    }
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn start_session(
        &self,
        user_id: Uuid,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<ChatSessionRow> {
        self.check_writable()?;
        let id = self.seed_session(user_id);
        self.seed_exchange(id, user_text, assistant_text);
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("session vanished"))
    }

    async fn session_owner(&self, session_id: Uuid) -> Result<Option<Uuid>> {
        Ok(self.owner_of(session_id))
    }

    async fn recent_messages(&self, session_id: Uuid, limit: i64) -> Result<Vec<ChatMessageRow>> {
        let all = self.all_messages(session_id);
        let skip = all.len().saturating_sub(limit.max(0) as usize);
        Ok(all.into_iter().skip(skip).collect())
    }

    async fn append_exchange(
        &self,
        session_id: Uuid,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<()> {
        self.check_writable()?;
        if self.owner_of(session_id).is_none() {
            return Err(anyhow!("chat session {session_id} does not exist"));
        }
        self.seed_exchange(session_id, user_text, assistant_text);
        Ok(())
    }

    async fn list_sessions(&self, user_id: Uuid) -> Result<Vec<ChatSessionRow>> {
        let mut sessions: Vec<_> = self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sessions)
    }

    async fn messages(&self, session_id: Uuid) -> Result<Vec<ChatMessageRow>> {
        Ok(self.all_messages(session_id))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Journal persistence and cache
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryJournalStore {
    entries: Mutex<Vec<JournalEntryRow>>,
}

#[async_trait]
impl JournalStore for MemoryJournalStore {
    async fn create(&self, user_id: Uuid, title: &str, content: &str) -> Result<JournalEntryRow> {
        let mut entries = self.entries.lock().unwrap();
        let now = tick(entries.len());
        let row = JournalEntryRow {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            user_id,
            created_at: now,
            updated_at: now,
        };
        entries.push(row.clone());
        Ok(row)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<JournalEntryRow>> {
        let mut mine: Vec<_> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }
}

#[derive(Default)]
pub struct MemoryJournalCache {
    generations: Mutex<HashMap<Uuid, u64>>,
    listings: Mutex<HashMap<(Uuid, u64), Vec<JournalEntryRow>>>,
}

impl MemoryJournalCache {
    fn current(&self, user_id: Uuid) -> u64 {
        self.generations
            .lock()
            .unwrap()
            .get(&user_id)
            .copied()
            .unwrap_or(0)
    }

    /// Whether a listing is cached under the user's current generation.
    pub fn contains(&self, user_id: Uuid) -> bool {
        let generation = self.current(user_id);
        self.listings
            .lock()
            .unwrap()
            .contains_key(&(user_id, generation))
    }
}

#[async_trait]
impl JournalCache for MemoryJournalCache {
    async fn generation(&self, user_id: Uuid) -> Result<u64> {
        Ok(self.current(user_id))
    }

    async fn get(&self, user_id: Uuid, generation: u64) -> Result<Option<Vec<JournalEntryRow>>> {
        Ok(self
            .listings
            .lock()
            .unwrap()
            .get(&(user_id, generation))
            .cloned())
    }

    async fn put(&self, user_id: Uuid, generation: u64, entries: &[JournalEntryRow]) -> Result<()> {
        self.listings
            .lock()
            .unwrap()
            .insert((user_id, generation), entries.to_vec());
        Ok(())
    }

    async fn invalidate(&self, user_id: Uuid) -> Result<()> {
        *self.generations.lock().unwrap().entry(user_id).or_insert(0) += 1;
        Ok(())
    }
}

pub struct FailingJournalCache;

#[async_trait]
impl JournalCache for FailingJournalCache {
    async fn generation(&self, _user_id: Uuid) -> Result<u64> {
        Err(anyhow!("redis unavailable"))
    }

    async fn get(&self, _user_id: Uuid, _generation: u64) -> Result<Option<Vec<JournalEntryRow>>> {
        Err(anyhow!("redis unavailable"))
    }

    async fn put(&self, _user_id: Uuid, _generation: u64, _entries: &[JournalEntryRow]) -> Result<()> {
        Err(anyhow!("redis unavailable"))
    }

    async fn invalidate(&self, _user_id: Uuid) -> Result<()> {
        Err(anyhow!("redis unavailable"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Auth
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemorySessions {
    by_token: HashMap<String, Session>,
}

impl MemorySessions {
    pub fn with_token(mut self, token: &str, user_id: Uuid) -> Self {
        self.by_token.insert(
            token.to_string(),
            Session {
                id: Uuid::new_v4(),
                user_id,
                expires_at: Utc::now() + Duration::days(7),
            },
        );
        self
    }
}

#[async_trait]
impl SessionProvider for MemorySessions {
    async fn get_session(&self, token: &str) -> Result<Option<Session>> {
        Ok(self
            .by_token
            .get(token)
            .filter(|s| s.expires_at > Utc::now())
            .cloned())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wiring
// ────────────────────────────────────────────────────────────────────────────

pub struct TestApp {
    pub state: AppState,
    pub llm: Arc<ScriptedGenerator>,
    pub chats: Arc<MemoryChatStore>,
}

/// App state where `token` authenticates as `user_id`.
pub fn test_app(llm: ScriptedGenerator, token: &str, user_id: Uuid) -> TestApp {
    let llm = Arc::new(llm);
    let chats = Arc::new(MemoryChatStore::default());
    let state = AppState {
        llm: llm.clone(),
        sessions: Arc::new(MemorySessions::default().with_token(token, user_id)),
        chats: chats.clone(),
        journal: Arc::new(MemoryJournalStore::default()),
        journal_cache: Arc::new(MemoryJournalCache::default()),
        session_cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
    };
    TestApp { state, llm, chats }
}
