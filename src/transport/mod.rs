//! Line-delimited transport layer.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (accept loop, connection limits)
//!     → session.rs (one request, frame-per-line response, close)
//!
//! Session states:
//!     Connected → Dispatched → Closed
//! ```
//!
//! The transport reserves `\n` as its message delimiter: one inbound line
//! is one message, and every outbound frame is written with exactly one
//! trailing delimiter. Frames never contain the delimiter themselves.

pub mod listener;
pub mod session;

pub use listener::{Listener, ListenerError};
