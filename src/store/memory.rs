//! In-memory score store.
//!
//! The shipped implementation of [`ScoreStore`]: a process-local table that
//! starts with no schema at all. Until `/create` has been requested, fetches
//! fail with `Unavailable`, which exercises the same degraded path a real
//! unreachable database would.

use std::sync::RwLock;

use super::types::ScoreRow;
use super::{ScoreStore, StoreError};

/// Process-local score table behind the gateway trait.
///
/// `None` means the schema has not been created yet.
pub struct MemoryScoreStore {
    rows: RwLock<Option<Vec<ScoreRow>>>,
}

impl MemoryScoreStore {
    /// Create a store with no schema. `ensure_schema_and_seed` brings it up.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(None),
        }
    }

    /// Starter rows written by the first successful seed.
    fn seed_rows() -> Vec<ScoreRow> {
        vec![
            ScoreRow {
                name: "Jim".to_string(),
                mass: 100.2,
                rank: 1,
                lifetime_secs: 412.5,
                started_at: "2022-04-12 18:30:00".to_string(),
            },
            ScoreRow {
                name: "Ada".to_string(),
                mass: 88.6,
                rank: 2,
                lifetime_secs: 305.0,
                started_at: "2022-04-13 09:12:00".to_string(),
            },
            ScoreRow {
                name: "Gus".to_string(),
                mass: 61.3,
                rank: 3,
                lifetime_secs: 190.8,
                started_at: "2022-04-13 21:47:00".to_string(),
            },
        ]
    }
}

impl Default for MemoryScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for MemoryScoreStore {
    async fn fetch_all_scores(&self) -> Result<Vec<ScoreRow>, StoreError> {
        let guard = self
            .rows
            .read()
            .map_err(|e| StoreError::Query(e.to_string()))?;

        match guard.as_ref() {
            Some(rows) => Ok(rows.clone()),
            None => Err(StoreError::Unavailable(
                "score table has not been created".to_string(),
            )),
        }
    }

    async fn ensure_schema_and_seed(&self) -> Result<String, StoreError> {
        let mut guard = self
            .rows
            .write()
            .map_err(|e| StoreError::Query(e.to_string()))?;

        match guard.as_ref() {
            Some(rows) => Ok(format!(
                "score table already present, kept {} existing rows",
                rows.len()
            )),
            None => {
                let rows = Self::seed_rows();
                let count = rows.len();
                *guard = Some(rows);
                Ok(format!("created score table and seeded {} rows", count))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_before_seed_is_unavailable() {
        let store = MemoryScoreStore::new();
        let result = store.fetch_all_scores().await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn seed_then_fetch_returns_rows() {
        let store = MemoryScoreStore::new();
        let detail = store.ensure_schema_and_seed().await.unwrap();
        assert!(detail.contains("seeded"));

        let rows = store.fetch_all_scores().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "Jim");
    }

    #[tokio::test]
    async fn repeated_seed_keeps_existing_rows() {
        let store = MemoryScoreStore::new();
        store.ensure_schema_and_seed().await.unwrap();

        let detail = store.ensure_schema_and_seed().await.unwrap();
        assert!(detail.contains("already present"));
        assert_eq!(store.fetch_all_scores().await.unwrap().len(), 3);
    }
}
