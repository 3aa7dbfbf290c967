//! Accept-loop composition.
//!
//! # Responsibilities
//! - Pull connections off the bounded listener
//! - Spawn one session task per connection, handing over the permit
//! - Stop accepting when the shutdown signal fires
//!
//! # Design Decisions
//! - Accept errors are logged and the loop continues; one bad accept must
//!   not take the server down
//! - Sessions run detached: the server never awaits them, and a failing
//!   session is invisible to every other session

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::routing::Dispatcher;
use crate::store::ScoreStore;
use crate::transport::session;
use crate::transport::{Listener, ListenerError};

/// The highscore server: one dispatcher shared across all sessions.
pub struct Server<S> {
    dispatcher: Arc<Dispatcher<S>>,
}

impl<S: ScoreStore> Server<S> {
    pub fn new(dispatcher: Dispatcher<S>) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Run the accept loop until the shutdown signal fires.
    pub async fn run(
        &self,
        listener: Listener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ListenerError> {
        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received, no longer accepting");
                    break;
                }
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, peer, permit)) => {
                            let dispatcher = Arc::clone(&self.dispatcher);
                            tokio::spawn(session::serve_connection(
                                stream, peer, permit, dispatcher,
                            ));
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Accept failed");
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
