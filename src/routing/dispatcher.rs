//! Outcome production for matched routes.
//!
//! # Responsibilities
//! - Turn a parsed request into exactly one Outcome
//! - Invoke the score store for the highscores and create routes
//! - Own the visit counter side effect of the home route
//!
//! # Design Decisions
//! - Store failures are absorbed here: a failed fetch degrades to the
//!   empty highscores page, a failed seed becomes a Seed outcome carrying
//!   the failure detail. Dispatch itself never returns an error
//! - Generic over the store trait so tests can inject failing stores

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::http::request::{Method, Request};
use crate::http::response::CONTENT_TYPE_HTML;
use crate::routing::{resolve, RouteMatch};
use crate::site::{pages, VisitCounter};
use crate::store::ScoreStore;

/// The closed set of results a dispatch can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A renderable page body.
    Page {
        body: String,
        content_type: &'static str,
    },
    /// No table entry matched the target.
    NotFound,
    /// Recognized but unimplemented; no response is sent, the connection
    /// still closes.
    NoOp,
    /// Result of the schema-and-seed operation, success or failure.
    Seed { success: bool, detail: String },
}

/// Maps parsed requests to outcomes against a score store.
pub struct Dispatcher<S> {
    store: Arc<S>,
    counter: VisitCounter,
    site: SiteConfig,
}

impl<S: ScoreStore> Dispatcher<S> {
    pub fn new(store: Arc<S>, counter: VisitCounter, site: SiteConfig) -> Self {
        Self {
            store,
            counter,
            site,
        }
    }

    /// Dispatch one request. Total: every method and target maps to an
    /// outcome, and store failures never escape this boundary.
    pub async fn dispatch(&self, request: &Request) -> Outcome {
        match request.method {
            Method::Get => self.dispatch_get(&request.target).await,
            // PUT is accepted but unimplemented; garbage lines likewise
            // get no response. The session closes the connection either way.
            Method::Put | Method::Unrecognized => {
                tracing::debug!(method = request.method.as_str(), "No route for method");
                Outcome::NoOp
            }
        }
    }

    async fn dispatch_get(&self, target: &str) -> Outcome {
        match resolve(target) {
            RouteMatch::Highscores => self.highscores_page().await,
            RouteMatch::Home => {
                let visitor = self.counter.next();
                tracing::debug!(visitor, "Serving home page");
                Outcome::Page {
                    body: pages::home(&self.site, visitor),
                    content_type: CONTENT_TYPE_HTML,
                }
            }
            RouteMatch::Create => match self.store.ensure_schema_and_seed().await {
                Ok(detail) => {
                    tracing::info!(%detail, "Score schema ensured");
                    Outcome::Seed {
                        success: true,
                        detail,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Schema-and-seed failed");
                    Outcome::Seed {
                        success: false,
                        detail: e.to_string(),
                    }
                }
            },
            RouteMatch::ScoreInsert
            | RouteMatch::ScoreLookup
            | RouteMatch::Custom
            | RouteMatch::Stylesheet => {
                tracing::debug!(route_target = target, "Reserved route, no response");
                Outcome::NoOp
            }
            RouteMatch::NotFound => {
                tracing::debug!(route_target = target, "No route matched");
                Outcome::NotFound
            }
        }
    }

    /// Highscores page, degraded to an empty table when the store is
    /// unavailable rather than propagating the failure.
    async fn highscores_page(&self) -> Outcome {
        let rows = match self.store.fetch_all_scores().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(error = %e, "Score fetch failed, rendering empty table");
                Vec::new()
            }
        };

        Outcome::Page {
            body: pages::highscores(&self.site, &rows),
            content_type: CONTENT_TYPE_HTML,
        }
    }
}
