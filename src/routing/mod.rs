//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Parsed Request (method, raw target)
//!     → resolve() (ordered first-match over the route table)
//!     → dispatcher.rs (run the matched route, produce an Outcome)
//! ```
//!
//! # Design Decisions
//! - The table is a priority list, not a set: first match wins, and the
//!   parameterized `/scores/...` literal is checked before the shorter
//!   `/scores` prefix it contains
//! - The home route matches the literal request-line tail exactly
//!   (including the version token) so a bare `/` prefix cannot shadow
//!   every other path
//! - Explicit NotFound rather than silent default; callers match the
//!   closed Outcome enum exhaustively

pub mod dispatcher;

pub use dispatcher::{Dispatcher, Outcome};

/// Reserved insert-without-direct-DB-tool pattern, matched literally.
pub const SCORE_INSERT_PATTERN: &str = "/scores/[name]/[highmass]/[highrank]/[starttime]/[endtime]";

/// Exact request-line tail that selects the home page.
pub const HOME_TARGET: &str = "/ HTTP/1.1";

/// Stylesheet target; served by a static-asset collaborator, not here.
pub const STYLESHEET_PREFIX: &str = "/css/styles.css?v=1.0";

/// A matched entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    /// `/highscores` — render the score table page.
    Highscores,
    /// The parameterized insert literal. Reserved; no response.
    ScoreInsert,
    /// `/scores` — reserved per-name score lookup. No response.
    ScoreLookup,
    /// `/custom` — reserved client-side chart view. No response.
    Custom,
    /// Exactly `/ HTTP/1.1` — the home page; bumps the visit counter.
    Home,
    /// `/create` — ask the store to build and seed its schema.
    Create,
    /// Stylesheet bytes, delegated to the static-asset collaborator.
    Stylesheet,
    /// No table entry matched.
    NotFound,
}

/// Resolve a GET target against the route table, first match wins.
///
/// Order matters: `/scores` is a prefix of [`SCORE_INSERT_PATTERN`] and
/// must be checked after it, never before.
pub fn resolve(target: &str) -> RouteMatch {
    if target.starts_with("/highscores") {
        RouteMatch::Highscores
    } else if target.starts_with(SCORE_INSERT_PATTERN) {
        RouteMatch::ScoreInsert
    } else if target.starts_with("/scores") {
        RouteMatch::ScoreLookup
    } else if target.starts_with("/custom") {
        RouteMatch::Custom
    } else if target == HOME_TARGET {
        RouteMatch::Home
    } else if target.starts_with("/create") {
        RouteMatch::Create
    } else if target.starts_with(STYLESHEET_PREFIX) {
        RouteMatch::Stylesheet
    } else {
        RouteMatch::NotFound
    }
}
