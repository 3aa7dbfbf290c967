//! Connection session lifecycle.
//!
//! # Responsibilities
//! - Track session state (Connected → Dispatched → Closed)
//! - Generate unique session IDs for tracing
//! - Serve exactly one request per connection, then close
//!
//! # Data Flow
//! ```text
//! One inbound line (delimiter stripped)
//!     → Request::parse
//!     → Dispatcher::dispatch (the only point that may block on the store)
//!     → response::assemble (None for NoOp outcomes)
//!     → framing::split_frames → one write per frame, in order
//!     → socket shutdown, unconditionally
//! ```
//!
//! Failures while reading, dispatching, or sending are recoverable at the
//! connection scope only: they are logged and the connection still closes.
//! Nothing here can take down the accept loop.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::http::framing::split_frames;
use crate::http::request::Request;
use crate::http::response;
use crate::routing::Dispatcher;
use crate::store::ScoreStore;
use crate::transport::listener::SessionPermit;

/// Global atomic counter for session IDs.
/// Relaxed ordering is sufficient since we only need uniqueness.
static SESSION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new() -> Self {
        Self(SESSION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepted, awaiting the single inbound request line.
    Connected,
    /// The one inbound message has been handled.
    Dispatched,
    /// The connection has been closed; the session is finished.
    Closed,
}

/// One accepted connection, from first byte to close.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    peer: SocketAddr,
    state: SessionState,
}

impl Session {
    pub fn new(peer: SocketAddr) -> Self {
        Self {
            id: SessionId::new(),
            peer,
            state: SessionState::Connected,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn mark_dispatched(&mut self) {
        self.state = SessionState::Dispatched;
    }

    fn mark_closed(&mut self) {
        self.state = SessionState::Closed;
        tracing::debug!(session_id = %self.id, peer_addr = %self.peer, "Goodbye");
    }
}

/// Serve one connection: read one line, dispatch, send frames, close.
///
/// The permit is held until this function returns, keeping the listener's
/// backpressure accounting honest.
pub async fn serve_connection<S: ScoreStore>(
    stream: TcpStream,
    peer: SocketAddr,
    permit: SessionPermit,
    dispatcher: Arc<Dispatcher<S>>,
) {
    let mut session = Session::new(peer);
    tracing::debug!(session_id = %session.id(), peer_addr = %peer, "Hello");

    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    // Handle the single request; any failure is confined to this session.
    if let Err(e) = handle_one_request(&mut reader, &mut write_half, &mut session, &dispatcher).await
    {
        tracing::debug!(session_id = %session.id(), error = %e, "Session error");
    }

    // Close unconditionally, whatever happened above.
    let _ = write_half.shutdown().await;
    session.mark_closed();
    drop(permit);
}

async fn handle_one_request<S: ScoreStore>(
    reader: &mut BufReader<tokio::net::tcp::OwnedReadHalf>,
    writer: &mut tokio::net::tcp::OwnedWriteHalf,
    session: &mut Session,
    dispatcher: &Dispatcher<S>,
) -> std::io::Result<()> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).await?;
    if read == 0 {
        // Peer closed before sending anything.
        return Ok(());
    }

    // The transport owns the delimiter; a browser's trailing `\r` is part
    // of the same framing concern and is stripped with it.
    let message = line.trim_end_matches(['\n', '\r']);

    let request = Request::parse(message);
    let outcome = dispatcher.dispatch(&request).await;
    session.mark_dispatched();

    if let Some(assembled) = response::assemble(&outcome) {
        send_frames(writer, &assembled).await?;
    }

    Ok(())
}

/// Send each physical line of the response as one delimited frame, in
/// order. A mid-response failure abandons the remaining frames.
async fn send_frames(
    writer: &mut tokio::net::tcp::OwnedWriteHalf,
    assembled: &str,
) -> std::io::Result<()> {
    for frame in split_frames(assembled) {
        writer.write_all(frame.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn session_walks_the_lifecycle() {
        let peer: SocketAddr = "127.0.0.1:40000".parse().unwrap();
        let mut session = Session::new(peer);
        assert_eq!(session.state(), SessionState::Connected);

        session.mark_dispatched();
        assert_eq!(session.state(), SessionState::Dispatched);

        session.mark_closed();
        assert_eq!(session.state(), SessionState::Closed);
    }
}
