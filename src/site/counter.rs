//! Process-wide visit counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counts visits to the home page for the lifetime of the process.
///
/// The counter starts at 1 and is bumped exactly once per served home page.
/// Read-modify-write happens in a single `fetch_add`, so two concurrent
/// visitors can never be shown the same number and no number is skipped.
#[derive(Debug, Clone)]
pub struct VisitCounter {
    count: Arc<AtomicU64>,
}

impl VisitCounter {
    /// Create a counter whose first rendered value will be 1.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Claim the next visit number. Returns the value to render.
    pub fn next(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst)
    }

    /// Read the counter without claiming a visit.
    pub fn current(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

impl Default for VisitCounter {
    fn default() -> Self {
        Self::new()
    }
}
