//! Typed error definitions.
//!
//! The widget itself never fails; the only fallible path is turning a
//! configuration document into a [`DemoConfig`](crate::models::DemoConfig).

mod config;

pub use config::ConfigError;

/// Standard Result type using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
