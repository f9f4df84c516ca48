use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::user::Session;

/// Resolves a session token to a live session.
///
/// Carried in `AppState` as `Arc<dyn SessionProvider>`.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns `None` for unknown or expired tokens.
    async fn get_session(&self, token: &str) -> Result<Option<Session>>;
}

pub struct PgSessionProvider {
    pool: PgPool,
}

impl PgSessionProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionProvider for PgSessionProvider {
    async fn get_session(&self, token: &str) -> Result<Option<Session>> {
        Ok(sqlx::query_as::<_, Session>(
            r#"
            SELECT s.id, s.user_id, s.expires_at
            FROM auth_sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token = $1 AND s.expires_at > now()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?)
    }
}
