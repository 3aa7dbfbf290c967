//! Configuration subsystem.
//!
//! Schema types, disk loading, and semantic validation. Configuration is
//! constructed once at process start and passed by value into the parts
//! that need it; nothing reads config lazily or at load time.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ServerConfig, SiteConfig};
pub use validation::{validate_config, ValidationError};
