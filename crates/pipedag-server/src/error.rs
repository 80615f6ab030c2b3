//! Error types for the pipedag server.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running the server.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred (binding, serving).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configuration file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`crate::ServerConfig`].
    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A CORS origin is not usable as a header value.
    #[error("Invalid allowed origin: '{0}'")]
    InvalidOrigin(String),
}

/// Result type for pipedag server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A request the server refuses to analyze.
///
/// Rendered as `{"detail": "<message>"}` with a 4xx status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body is not a well-formed pipeline document.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(rejection) => rejection.status(),
        }
    }

    /// Client-facing message.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidBody(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        tracing::warn!(status = status.as_u16(), %detail, "Rejected request");

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
