//! Error types for loading, view binding, and configuration

use thiserror::Error;

/// Failure to obtain or parse the portfolio document
#[derive(Debug, Error)]
pub enum LoadError {
    /// Server answered with a non-success status
    #[error("could not load {url} (HTTP {status})")]
    Status { url: String, status: u16 },

    /// Request never produced a response
    #[error("could not load {url}: {reason}")]
    Transport { url: String, reason: String },

    /// Data URL could not be resolved against the page location
    #[error("invalid data url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Local file could not be read
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid JSON for the portfolio schema
    #[error("could not parse portfolio data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The host document is missing elements the app depends on
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("host document is missing required elements: {}", .0.join(", "))]
    MissingSlots(Vec<&'static str>),
}

/// Configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
