//! `createJournalEntry` / `getJournalEntries`.

use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::journal::cache::JournalCache;
use crate::journal::store::JournalStore;
use crate::models::journal::JournalEntryRow;

#[derive(Debug, Default, Deserialize)]
pub struct NewJournalEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

pub async fn create_journal_entry(
    store: &dyn JournalStore,
    cache: &dyn JournalCache,
    user_id: Uuid,
    entry: NewJournalEntry,
) -> Result<JournalEntryRow, AppError> {
    if entry.title.trim().is_empty() || entry.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Title and content are required".to_string(),
        ));
    }

    let created = store.create(user_id, &entry.title, &entry.content).await?;

    if let Err(e) = cache.invalidate(user_id).await {
        warn!("Failed to invalidate journal cache for user {user_id}: {e}");
    }

    Ok(created)
}

/// Unauthenticated callers get an empty list, not an error.
pub async fn get_journal_entries(
    store: &dyn JournalStore,
    cache: &dyn JournalCache,
    user_id: Option<Uuid>,
) -> Result<Vec<JournalEntryRow>, AppError> {
    let Some(user_id) = user_id else {
        return Ok(Vec::new());
    };

    // Without a generation the cache cannot be used safely; go straight to the store.
    let generation = match cache.generation(user_id).await {
        Ok(generation) => Some(generation),
        Err(e) => {
            warn!("Journal cache generation read failed for user {user_id}: {e}");
            None
        }
    };

    if let Some(generation) = generation {
        match cache.get(user_id, generation).await {
            Ok(Some(entries)) => return Ok(entries),
            Ok(None) => {}
            Err(e) => warn!("Journal cache read failed for user {user_id}: {e}"),
        }
    }

    let entries = store.list_for_user(user_id).await?;

    if let Some(generation) = generation {
        if let Err(e) = cache.put(user_id, generation, &entries).await {
            warn!("Journal cache write failed for user {user_id}: {e}");
        }
    }

    Ok(entries)
}
