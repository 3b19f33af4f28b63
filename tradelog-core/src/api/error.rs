//! Structured error types for API operations.
//!
//! Designed to be displayable in both CLI and TUI contexts. Authorization
//! expiry is a value (`Unauthorized`), not a side effect; callers decide
//! whether it means a re-login prompt or a status-bar message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("login failed")]
    LoginFailed,

    #[error("registration failed: {0}")]
    RegistrationRejected(String),

    #[error("not authorized: token missing or expired")]
    Unauthorized,

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("HTTP {status} for {endpoint}")]
    Http { status: u16, endpoint: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
