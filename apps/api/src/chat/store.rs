use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};
use tracing::debug;
use uuid::Uuid;

use crate::models::chat::{ChatMessageRow, ChatSessionRow, MessageRole};

/// Persistence for chat sessions and their append-only message log.
///
/// Carried in `AppState` as `Arc<dyn ChatStore>`.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Creates a session holding its first exchange. Either both are stored or neither.
    async fn start_session(
        &self,
        user_id: Uuid,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<ChatSessionRow>;

    /// Owner of a session, or `None` if it does not exist.
    async fn session_owner(&self, session_id: Uuid) -> Result<Option<Uuid>>;

    /// The `limit` most recent messages of a session, oldest first.
    async fn recent_messages(&self, session_id: Uuid, limit: i64) -> Result<Vec<ChatMessageRow>>;

    /// Appends a user message and its assistant reply as one pair.
    async fn append_exchange(
        &self,
        session_id: Uuid,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<()>;

    /// A user's sessions, newest first.
    async fn list_sessions(&self, user_id: Uuid) -> Result<Vec<ChatSessionRow>>;

    /// Every message of a session, oldest first.
    async fn messages(&self, session_id: Uuid) -> Result<Vec<ChatMessageRow>>;
}

pub struct PgChatStore {
    pool: PgPool,
}

impl PgChatStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatStore for PgChatStore {
    async fn start_session(
        &self,
        user_id: Uuid,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<ChatSessionRow> {
        let mut tx = self.pool.begin().await?;

        let session = sqlx::query_as::<_, ChatSessionRow>(
            "INSERT INTO chat_sessions (id, user_id) VALUES ($1, $2) RETURNING id, user_id, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        insert_exchange(session.id, user_text, assistant_text)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!("Created chat session {} for user {user_id}", session.id);
        Ok(session)
    }

    async fn session_owner(&self, session_id: Uuid) -> Result<Option<Uuid>> {
        Ok(
            sqlx::query_scalar("SELECT user_id FROM chat_sessions WHERE id = $1")
                .bind(session_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn recent_messages(&self, session_id: Uuid, limit: i64) -> Result<Vec<ChatMessageRow>> {
        Ok(sqlx::query_as::<_, ChatMessageRow>(
            r#"
            SELECT id, session_id, role, content, created_at
            FROM (
                SELECT id, session_id, role, content, created_at, seq
                FROM chat_messages
                WHERE session_id = $1
                ORDER BY created_at DESC, seq DESC
                LIMIT $2
            ) recent
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(session_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn append_exchange(
        &self,
        session_id: Uuid,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<()> {
        insert_exchange(session_id, user_text, assistant_text)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_sessions(&self, user_id: Uuid) -> Result<Vec<ChatSessionRow>> {
        Ok(sqlx::query_as::<_, ChatSessionRow>(
            "SELECT id, user_id, created_at FROM chat_sessions WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn messages(&self, session_id: Uuid) -> Result<Vec<ChatMessageRow>> {
        Ok(sqlx::query_as::<_, ChatMessageRow>(
            r#"
            SELECT id, session_id, role, content, created_at
            FROM chat_messages
            WHERE session_id = $1
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

/// Single statement: both rows share created_at and `seq` keeps the pair ordered.
fn insert_exchange<'q>(
    session_id: Uuid,
    user_text: &'q str,
    assistant_text: &'q str,
) -> Query<'q, Postgres, PgArguments> {
    sqlx::query(
        r#"
        INSERT INTO chat_messages (id, session_id, role, content)
        VALUES ($1, $3, $4, $5), ($2, $3, $6, $7)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(Uuid::new_v4())
    .bind(session_id)
    .bind(MessageRole::User.as_str())
    .bind(user_text)
    .bind(MessageRole::Assistant.as_str())
    .bind(assistant_text)
}
