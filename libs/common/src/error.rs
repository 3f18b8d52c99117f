//! Custom error types for the CancerVisionHub client
//!
//! This module defines the error taxonomy shared by every service client:
//! client-side validation failures, HTTP failures carrying the response
//! body, transport errors, and session storage problems.

use thiserror::Error;

/// Custom error type for client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// The stored credentials are missing, expired, or were rejected by the
    /// backend. Produced by the shared 401 interceptor after the session
    /// has been torn down.
    #[error("Session expired or not authenticated")]
    Unauthorized,

    /// The backend answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client-side validation rejected the input before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// The access token could not be decoded
    #[error("Invalid access token: {0}")]
    Token(String),

    /// File or session storage I/O failure
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
