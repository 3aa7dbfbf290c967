//! Score store gateway.
//!
//! # Responsibilities
//! - Define the contract the router needs from the relational store
//! - Fetch all score rows for the highscores page
//! - Create and seed the score schema on demand (`/create` route)
//!
//! # Design Decisions
//! - The gateway is a trait seam: the router is generic over it, so tests
//!   swap in failing or canned stores without touching the dispatch path
//! - Store failures are values (`StoreError`), never panics; the dispatch
//!   boundary downgrades them to degraded pages
//! - Connection management and schema layout are the store's own concern

pub mod memory;
pub mod types;

pub use memory::MemoryScoreStore;
pub use types::ScoreRow;

use std::future::Future;
use thiserror::Error;

/// Error type for score store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be reached or its schema does not exist yet.
    #[error("score store unavailable: {0}")]
    Unavailable(String),
    /// The store was reachable but the operation itself failed.
    #[error("score query failed: {0}")]
    Query(String),
}

/// Contract the router requires from the score store.
///
/// Both operations may block on I/O; callers must treat them as slow and
/// hold no connection-wide state across the calls.
pub trait ScoreStore: Send + Sync + 'static {
    /// Fetch every score row, for the highscores page.
    fn fetch_all_scores(&self) -> impl Future<Output = Result<Vec<ScoreRow>, StoreError>> + Send;

    /// Create the score schema if absent and seed it with starter data.
    ///
    /// Returns a human-readable detail line describing what happened; the
    /// detail is rendered into the `/create` response, success or not.
    fn ensure_schema_and_seed(&self) -> impl Future<Output = Result<String, StoreError>> + Send;
}
