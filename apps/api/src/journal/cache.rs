//! Per-user cache of journal listings.
//!
//! Listings are stored under a per-user generation number. Creating an entry
//! bumps the generation, so a listing read before the bump can only be
//! written under a key no reader will look at again.
//!
//! A cache failure never fails a request: callers log it and go to the store.

use anyhow::Result;
use async_trait::async_trait;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::models::journal::JournalEntryRow;

#[async_trait]
pub trait JournalCache: Send + Sync {
    /// Current generation of a user's listing; 0 before the first invalidation.
    async fn generation(&self, user_id: Uuid) -> Result<u64>;
    async fn get(&self, user_id: Uuid, generation: u64) -> Result<Option<Vec<JournalEntryRow>>>;
    async fn put(&self, user_id: Uuid, generation: u64, entries: &[JournalEntryRow]) -> Result<()>;
    /// Moves the user to a new generation so the next read reflects new entries.
    async fn invalidate(&self, user_id: Uuid) -> Result<()>;
}

pub fn generation_key(user_id: Uuid) -> String {
    format!("journal:gen:{user_id}")
}

pub fn listing_key(user_id: Uuid, generation: u64) -> String {
    format!("journal:{user_id}:{generation}")
}

pub struct RedisJournalCache {
    client: redis::Client,
    ttl_secs: u64,
}

impl RedisJournalCache {
    pub fn new(client: redis::Client, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }
}

#[async_trait]
impl JournalCache for RedisJournalCache {
    async fn generation(&self, user_id: Uuid) -> Result<u64> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let generation: Option<u64> = conn.get(generation_key(user_id)).await?;
        Ok(generation.unwrap_or(0))
    }

    async fn get(&self, user_id: Uuid, generation: u64) -> Result<Option<Vec<JournalEntryRow>>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let cached: Option<String> = conn.get(listing_key(user_id, generation)).await?;
        match cached {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, user_id: Uuid, generation: u64, entries: &[JournalEntryRow]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set_ex::<_, _, ()>(listing_key(user_id, generation), json, self.ttl_secs)
            .await?;
        Ok(())
    }

    async fn invalidate(&self, user_id: Uuid) -> Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.incr::<_, _, ()>(generation_key(user_id), 1).await?;
        Ok(())
    }
}
