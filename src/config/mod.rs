//! Configuration model for quill.
//!
//! This module defines the Config struct that represents `quill.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, validation of config values, and
//! API key resolution.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{API_KEY_ENV_VARS, DEFAULT_CONFIG_FILE};
