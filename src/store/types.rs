//! Score record types shared across the store boundary.

/// One row of the highscore table.
///
/// Read-only to the rest of the server: rows are fetched to render the
/// highscores page and never mutated outside the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    /// Player name.
    pub name: String,
    /// Highest mass reached in a single game.
    pub mass: f32,
    /// Best rank achieved.
    pub rank: u32,
    /// How long the player survived, in seconds.
    pub lifetime_secs: f32,
    /// When the recorded game started, as display text.
    pub started_at: String,
}
