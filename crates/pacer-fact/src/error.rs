//! Error types for pacer-fact.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FactError>;

#[derive(Debug, Error)]
pub enum FactError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to start runtime: {0}")]
    Runtime(#[source] io::Error),
}

impl From<reqwest::Error> for FactError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FactError::Timeout(e)
        } else if e.is_connect() {
            FactError::Connect(e)
        } else if let Some(status) = e.status() {
            FactError::Status(status)
        } else {
            FactError::Request(e)
        }
    }
}
