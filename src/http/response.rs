//! Response assembly.
//!
//! # Responsibilities
//! - Build the status line, header block, and body for a route outcome
//! - Compute Content-Length from the exact finalized body bytes
//!
//! # Design Decisions
//! - Header order is fixed: status, Content-Length, Content-Type,
//!   Connection, then exactly one blank line before the body
//! - `Connection:Closed` is emitted byte-for-byte as the upstream protocol
//!   writes it (no space after the colon)
//! - NoOp outcomes assemble to nothing at all; the session still closes

use crate::routing::Outcome;
use crate::site::pages;

/// Default content type when an outcome does not override it.
pub const CONTENT_TYPE_HTML: &str = "text/html";

/// Status lines this server can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
}

impl Status {
    fn reason(&self) -> &'static str {
        match self {
            Status::Ok => "200 OK",
            Status::NotFound => "404 Not Found",
        }
    }
}

/// Assemble the complete response text for an outcome.
///
/// Returns `None` for outcomes that produce no response (reserved routes,
/// PUT, unrecognized lines); the connection closes either way.
pub fn assemble(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Page { body, content_type } => Some(build(Status::Ok, content_type, body)),
        Outcome::NotFound => Some(build(Status::NotFound, CONTENT_TYPE_HTML, &pages::not_found())),
        Outcome::Seed { success, detail } => Some(build(
            Status::Ok,
            CONTENT_TYPE_HTML,
            &pages::seed_result(*success, detail),
        )),
        Outcome::NoOp => None,
    }
}

/// Build status line + header block + blank line + body.
///
/// Content-Length is computed from the body after it is final; nothing may
/// mutate the body once the length is taken.
fn build(status: Status, content_type: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\n\
         Content-Length: {length}\n\
         Content-Type: {content_type}\n\
         Connection:Closed\n\
         \n\
         {body}",
        status = status.reason(),
        length = body.len(),
        content_type = content_type,
        body = body,
    )
}
