use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::journal::JournalEntryRow;

/// Carried in `AppState` as `Arc<dyn JournalStore>`.
#[async_trait]
pub trait JournalStore: Send + Sync {
    async fn create(&self, user_id: Uuid, title: &str, content: &str) -> Result<JournalEntryRow>;

    /// Entries owned by `user_id`, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<JournalEntryRow>>;
}

pub struct PgJournalStore {
    pool: PgPool,
}

impl PgJournalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JournalStore for PgJournalStore {
    async fn create(&self, user_id: Uuid, title: &str, content: &str) -> Result<JournalEntryRow> {
        let entry = sqlx::query_as::<_, JournalEntryRow>(
            r#"
            INSERT INTO journal_entries (id, user_id, title, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, user_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted journal entry {} for user {user_id}", entry.id);
        Ok(entry)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<JournalEntryRow>> {
        Ok(sqlx::query_as::<_, JournalEntryRow>(
            r#"
            SELECT id, title, content, user_id, created_at, updated_at
            FROM journal_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
