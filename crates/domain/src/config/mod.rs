//! Configuration module for Ferrous Resolve
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Root hints, timeouts and resolution budgets
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, DEFAULT_MAX_HOPS, DEFAULT_MAX_NESTING_DEPTH};
pub use root::{CliOverrides, Config};
