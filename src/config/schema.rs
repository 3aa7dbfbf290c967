//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the highscore server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address, connection limit).
    pub listener: ListenerConfig,

    /// Site identity rendered into page metadata.
    pub site: SiteConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:11001").
    pub bind_address: String,

    /// Maximum concurrent connections (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:11001".to_string(),
            max_connections: 1_024,
        }
    }
}

/// Site identity: titles, metadata tags, and link targets for the
/// rendered pages.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page title and heading.
    pub title: String,

    /// Description metadata tag content.
    pub description: String,

    /// Author metadata tag content.
    pub author: String,

    /// Absolute URL of the home page, used for reload links and og:url.
    pub base_url: String,

    /// Stylesheet href placed in every page head.
    pub stylesheet_href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Agario 2 Statistics".to_string(),
            description: "Agario stats for nerds.".to_string(),
            author: "The Agario 2 stats crew".to_string(),
            base_url: "http://localhost:11001".to_string(),
            stylesheet_href: "css/styles.css?v=1.0".to_string(),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter when RUST_LOG is not set.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "highscore_server=debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:11001");
        assert_eq!(config.listener.max_connections, 1_024);
        assert_eq!(config.site.stylesheet_href, "css/styles.css?v=1.0");
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let config: ServerConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [site]
            title = "Test Stats"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        // Unspecified fields in a present section still default.
        assert_eq!(config.listener.max_connections, 1_024);
        assert_eq!(config.site.title, "Test Stats");
        assert_eq!(config.site.author, "The Agario 2 stats crew");
    }
}
