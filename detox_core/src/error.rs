//! Errors raised at the edges of the detox engine.
//!
//! Classification and treatment are total and never produce these; they come
//! from loading config and subject fixtures, validating a merged catalog, and
//! notifier sinks (whose failures the engine logs and drops).

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a config file or subject fixture failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Subject fixture was not valid JSON, or the JSON report failed to encode
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A `[cycle]` value is out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config extensions put one id in more than one catalog table
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Fixture describes an unusable subject (empty name or affliction id)
    #[error("Subject error: {0}")]
    Subject(String),

    /// A notifier could not deliver a notice
    #[error("Notify error: {0}")]
    Notify(String),
}
