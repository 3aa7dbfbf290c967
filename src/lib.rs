//! Highscore web server over a line-delimited transport.
//!
//! Serves HTTP-shaped pages about a knockoff Agario game to ordinary
//! browsers, but the wire below is not HTTP: the transport reserves `\n`
//! as its message delimiter, so every physical line of a response goes
//! out as its own frame and the transport reinserts the delimiter.
//!
//! # Architecture Overview
//! ```text
//! browser line ─▶ transport (listener + session)
//!                     │ one message per connection
//!                     ▼
//!                 http::request ── parse method + raw target
//!                     ▼
//!                 routing ── ordered first-match table ──▶ store (gateway)
//!                     ▼
//!                 http::response ── status + headers + HTML body
//!                     ▼
//!                 http::framing ── one frame per line, blank lines kept
//!                     ▼
//!                 session sends frames in order, then always closes
//! ```
//!
//! Exactly one request is served per connection, whatever the outcome.
//! The only state shared between sessions is the visit counter.

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;
pub mod server;
pub mod transport;

// Domain
pub mod site;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use lifecycle::Shutdown;
pub use routing::Dispatcher;
pub use server::Server;
