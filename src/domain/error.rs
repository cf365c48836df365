use serde::{Deserialize, Serialize};
use std::fmt;

pub const BAD_REQUEST_MESSAGE: &str = "Text, source language, and target language are required";
pub const MISCONFIGURED_MESSAGE: &str =
    "Translation service is not configured. Please set the provider API key.";
pub const UNAUTHORIZED_MESSAGE: &str =
    "Invalid API key. Please check the translation provider credentials.";
pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Please try again in a moment.";
pub const UPSTREAM_MESSAGE: &str = "Translation failed. Please try again.";
pub const CLIENT_TRANSPORT_MESSAGE: &str =
    "Could not reach the translation service. Please check your connection and try again.";

/// Failure kinds shared by the proxy and the client.
///
/// The payload of `Upstream` and `ClientTransport` is diagnostic detail for
/// logs; what reaches a user is always `user_message()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    BadRequest(String),
    Misconfigured(String),
    Unauthorized(String),
    RateLimited(String),
    Upstream(String),
    ClientTransport(String),
    Internal(String),
    IoError(String),
}

impl AppError {
    pub fn http_status(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::Unauthorized(_) => 401,
            AppError::RateLimited(_) => 429,
            AppError::Misconfigured(_)
            | AppError::Upstream(_)
            | AppError::ClientTransport(_)
            | AppError::Internal(_)
            | AppError::IoError(_) => 500,
        }
    }

    /// Normalized message safe to show to an end user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) if !msg.is_empty() => msg.clone(),
            AppError::BadRequest(_) => BAD_REQUEST_MESSAGE.to_string(),
            AppError::Misconfigured(_) => MISCONFIGURED_MESSAGE.to_string(),
            AppError::Unauthorized(_) => UNAUTHORIZED_MESSAGE.to_string(),
            AppError::RateLimited(_) => RATE_LIMITED_MESSAGE.to_string(),
            AppError::ClientTransport(_) => CLIENT_TRANSPORT_MESSAGE.to_string(),
            AppError::Upstream(_) | AppError::Internal(_) | AppError::IoError(_) => {
                UPSTREAM_MESSAGE.to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Misconfigured(msg) => write!(f, "Misconfigured: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            AppError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            AppError::ClientTransport(msg) => write!(f, "Transport error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
