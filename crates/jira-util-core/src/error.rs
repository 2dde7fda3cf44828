// Rust guideline compliant 2026-10-18

//! Error types for the jira-util core library.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for jira-util operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error codes for machine-readable error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// An input line could not be split into kind and summary.
    MalformedLine,
    /// An issue kind token was not recognized.
    InvalidIssueKind,
    /// A required configuration value is absent.
    MissingConfiguration,
    /// The tracker answered with a client error.
    RemoteRejected,
    /// The tracker could not be reached or gave no usable response.
    TransportFailure,
    /// The configuration file is missing or invalid.
    ConfigError,
    /// IO failure while reading input.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Error types for jira-util operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input line is missing the `": "` separator.
    #[error("Malformed line {line}: '{content}' (expected '<Kind>: <summary>')")]
    MalformedLine {
        /// 1-based line number in the input.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// Unrecognized issue kind token.
    #[error("Invalid issue kind: {0}")]
    InvalidIssueKind(String),

    /// A required configuration value is absent.
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// The tracker rejected the request with a 4xx status.
    #[error("HTTP error {status} for {method} {url}: {payload}")]
    RemoteRejected {
        /// HTTP status code.
        status: u16,
        /// HTTP method of the failed request.
        method: String,
        /// Full request URL.
        url: String,
        /// Decoded error payload returned by the tracker.
        payload: serde_json::Value,
    },

    /// The request produced no usable response.
    #[error("Request error for {method} {url}: {message}")]
    TransportFailure {
        /// HTTP method of the failed request.
        method: String,
        /// Full request URL.
        url: String,
        /// Description of the failure.
        message: String,
    },

    /// Configuration file is missing, unreadable, or invalid.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::MalformedLine { .. } => ErrorCode::MalformedLine,
            Error::InvalidIssueKind(_) => ErrorCode::InvalidIssueKind,
            Error::MissingConfiguration(_) => ErrorCode::MissingConfiguration,
            Error::RemoteRejected { .. } => ErrorCode::RemoteRejected,
            Error::TransportFailure { .. } => ErrorCode::TransportFailure,
            Error::Config(_) => ErrorCode::ConfigError,
            Error::Io(_) => ErrorCode::IoError,
            Error::Json(_) => ErrorCode::JsonError,
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::MalformedLine { line, content } => Some(serde_json::json!({
                "line": line,
                "content": content,
            })),
            Error::RemoteRejected {
                status,
                method,
                url,
                payload,
            } => Some(serde_json::json!({
                "status": status,
                "method": method,
                "url": url,
                "payload": payload,
            })),
            Error::TransportFailure { method, url, .. } => Some(serde_json::json!({
                "method": method,
                "url": url,
            })),
            _ => None,
        }
    }
}
