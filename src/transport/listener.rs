//! TCP listener for the line-delimited transport.
//!
//! # Responsibilities
//! - Bind to the configured address
//! - Accept incoming connections
//! - Enforce max_connections via semaphore
//!
//! # Design Decisions
//! - The permit is acquired before accept, so a full server stops pulling
//!   connections off the queue instead of accepting and stalling them
//! - The permit is held for the connection's lifetime and released on drop,
//!   so backpressure survives even a panicking session task

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug)]
pub enum ListenerError {
    /// Failed to bind to address.
    Bind(std::io::Error),
    /// Failed to accept connection.
    Accept(std::io::Error),
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::Bind(e) => write!(f, "Failed to bind: {}", e),
            ListenerError::Accept(e) => write!(f, "Failed to accept: {}", e),
        }
    }
}

impl std::error::Error for ListenerError {}

/// A bounded TCP listener that limits concurrent sessions.
pub struct Listener {
    inner: TcpListener,
    session_limit: Arc<Semaphore>,
}

impl Listener {
    /// Bind to the configured address with the configured session limit.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
            ListenerError::Bind(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
        })?;

        let listener = TcpListener::bind(addr).await.map_err(ListenerError::Bind)?;
        let local_addr = listener.local_addr().map_err(ListenerError::Bind)?;

        tracing::info!(
            address = %local_addr,
            max_connections = config.max_connections,
            "Listener bound"
        );

        Ok(Self {
            inner: listener,
            session_limit: Arc::new(Semaphore::new(config.max_connections)),
        })
    }

    /// Accept one connection, waiting for a session slot first.
    ///
    /// The returned permit must be held for the connection's lifetime.
    pub async fn accept(&self) -> Result<(TcpStream, SocketAddr, SessionPermit), ListenerError> {
        let permit = self
            .session_limit
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| {
                ListenerError::Accept(std::io::Error::new(std::io::ErrorKind::Other, e))
            })?;

        let (stream, addr) = self.inner.accept().await.map_err(ListenerError::Accept)?;

        tracing::debug!(
            peer_addr = %addr,
            available_permits = self.session_limit.available_permits(),
            "Connection accepted"
        );

        Ok((stream, addr, SessionPermit { _permit: permit }))
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.inner.local_addr()
    }

    /// Get current available session slots.
    pub fn available_permits(&self) -> usize {
        self.session_limit.available_permits()
    }
}

/// A permit representing one session slot, released back on drop.
#[derive(Debug)]
pub struct SessionPermit {
    _permit: tokio::sync::OwnedSemaphorePermit,
}
