//! HTTP-shaped request and response handling.
//!
//! # Data Flow
//! ```text
//! One inbound transport message (the request line)
//!     → request.rs (classify method, extract raw target)
//!     → routing (dispatch to an outcome)
//!     → response.rs (status line + headers + body)
//!     → framing.rs (one transport frame per physical line)
//! ```
//!
//! This is HTTP-shaped, not HTTP: one request per connection, a fixed
//! header block, no header parsing, no keep-alive.

pub mod framing;
pub mod request;
pub mod response;

pub use request::{Method, Request};
