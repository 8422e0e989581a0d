//! Error types for the HRMS client.
//!
//! This module contains the error enum returned by every client operation.
//! It provides:
//! - `HrmsError`: transport, middleware, HTTP status and encoding failures
//! - Conversions from `reqwest`, `reqwest_middleware`, `serde_json` and `tokio` errors
//!
//! Backend error bodies are carried as-is; nothing here interprets them.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrmsError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP middleware error: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    #[error("{url} responded with {status}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// The connection failed while the error body was being read. `partial_body`
    /// holds whatever arrived before that.
    #[error("{url} responded with {status}, but its body could not be read: {source}")]
    UnreadableBody {
        status: StatusCode,
        url: String,
        partial_body: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Background request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl HrmsError {
    /// HTTP status of the failed exchange, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } | Self::UnreadableBody { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            Self::HttpMiddleware(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HrmsError>;
