//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (connection limit > 0, bind address parseable)
//! - Reject empty site identity fields that would render broken pages
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServerConfig;

/// A single semantic configuration problem.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Bind address is not a parseable socket address.
    InvalidBindAddress(String),
    /// Connection limit of zero would make the listener accept nothing.
    ZeroMaxConnections,
    /// A site field that is rendered into every page is empty.
    EmptySiteField(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address: {}", addr)
            }
            ValidationError::ZeroMaxConnections => {
                write!(f, "max_connections must be greater than zero")
            }
            ValidationError::EmptySiteField(field) => {
                write!(f, "site.{} must not be empty", field)
            }
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.listener.max_connections == 0 {
        errors.push(ValidationError::ZeroMaxConnections);
    }

    if config.site.title.trim().is_empty() {
        errors.push(ValidationError::EmptySiteField("title"));
    }

    if config.site.base_url.trim().is_empty() {
        errors.push(ValidationError::EmptySiteField("base_url"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error_at_once() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.listener.max_connections = 0;
        config.site.title = "  ".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroMaxConnections));
        assert!(errors.contains(&ValidationError::EmptySiteField("title")));
    }
}
