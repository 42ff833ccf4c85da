/// Error types
///
/// `FetchError` travels inside application messages, so it only carries
/// strings and stays `Clone`.
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Http { url: String, reason: String },
    #[error("failed to read response body: {0}")]
    Read(String),
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("fetch task join error: {0}")]
    Join(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported column count {0} (expected 2, 4 or 6)")]
    InvalidColumns(u8),
}
