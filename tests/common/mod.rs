//! Shared utilities for end-to-end testing over real sockets.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use highscore_server::config::ServerConfig;
use highscore_server::routing::Dispatcher;
use highscore_server::site::VisitCounter;
use highscore_server::store::{MemoryScoreStore, ScoreRow, ScoreStore, StoreError};
use highscore_server::transport::Listener;
use highscore_server::{Server, Shutdown};

/// A running server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Start a server backed by a fresh in-memory store.
pub async fn start_server() -> TestServer {
    start_server_with(Arc::new(MemoryScoreStore::new())).await
}

/// Start a server backed by the given store.
pub async fn start_server_with<S: ScoreStore>(store: Arc<S>) -> TestServer {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = Listener::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let dispatcher = Dispatcher::new(store, VisitCounter::new(), config.site.clone());
    let server = Server::new(dispatcher);

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, shutdown_rx).await;
    });

    TestServer { addr, shutdown }
}

/// Send one request line the way a browser would (CRLF-terminated) and
/// collect every frame the server sends back until it closes.
pub async fn send_request(addr: SocketAddr, line: &str) -> Vec<String> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(line.as_bytes()).await.unwrap();
    stream.write_all(b"\r\n").await.unwrap();

    let mut reader = BufReader::new(stream);
    let mut frames = Vec::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf).await.unwrap();
        if read == 0 {
            break;
        }
        frames.push(buf.trim_end_matches('\n').to_string());
    }
    frames
}

/// The body text: everything after the first blank frame, rejoined with
/// the delimiter the transport reinserts.
pub fn body_of(frames: &[String]) -> String {
    let separator = frames
        .iter()
        .position(|f| f.is_empty())
        .expect("response has no header/body separator");
    frames[separator + 1..].join("\n")
}

/// Look up a header value in the frames before the blank separator.
pub fn header_value(frames: &[String], name: &str) -> Option<String> {
    let prefix = format!("{}:", name);
    frames
        .iter()
        .take_while(|f| !f.is_empty())
        .find_map(|f| f.strip_prefix(&prefix).map(|v| v.trim().to_string()))
}

/// Store whose every operation fails, to exercise degraded paths end to end.
pub struct OfflineStore;

impl ScoreStore for OfflineStore {
    async fn fetch_all_scores(&self) -> Result<Vec<ScoreRow>, StoreError> {
        Err(StoreError::Unavailable("database server offline".to_string()))
    }

    async fn ensure_schema_and_seed(&self) -> Result<String, StoreError> {
        Err(StoreError::Unavailable("database server offline".to_string()))
    }
}
