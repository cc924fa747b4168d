//! Error types for the Personal Capital client
//!
//! Two error enums cover the crate: [`AuthError`] for failures inside the
//! login flow and [`AppError`] for everything else. HTTP-status failures and
//! missing envelope fields surface directly to the caller; business failures
//! reported only inside `spHeader` are left in the header for inspection and
//! never raised here.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request was rejected with HTTP 401
    Unauthorized,
    /// The remote service requires a two-factor challenge before proceeding
    TwoFactorRequired,
    /// The request failed with an unexpected HTTP status
    Unexpected(StatusCode),
    /// An expected field was missing from the response envelope
    MissingField(String),
    /// The caller supplied an invalid input
    InvalidInput(String),
    /// Network-level failure from the HTTP layer
    Network(reqwest::Error),
    /// JSON decoding failure
    Json(serde_json::Error),
    /// I/O failure, e.g. while reading a two-factor code from the console
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::TwoFactorRequired => write!(f, "two-factor authentication required"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::MissingField(field) => write!(f, "missing response field: {field}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

/// Error type for the authentication flow
#[derive(Debug)]
pub enum AuthError {
    /// Identification succeeded but the service demands a two-factor challenge
    TwoFactorRequired,
    /// No CSRF token could be extracted from the login page
    CsrfNotFound,
    /// The credentials were rejected
    BadCredentials,
    /// A login step was attempted before the flow was started
    NoSession,
    /// An authentication request failed with an unexpected HTTP status
    Unexpected(StatusCode),
    /// Network-level failure from the HTTP layer
    Network(reqwest::Error),
    /// JSON decoding failure
    Json(serde_json::Error),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::TwoFactorRequired => write!(f, "two-factor authentication required"),
            AuthError::CsrfNotFound => write!(f, "csrf token not found in login page"),
            AuthError::BadCredentials => write!(f, "bad credentials"),
            AuthError::NoSession => write!(f, "no active login flow"),
            AuthError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AuthError::Network(e) => write!(f, "network error: {e}"),
            AuthError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Network(e) => Some(e),
            AuthError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Network(e)
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        AuthError::Json(e)
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::TwoFactorRequired => AppError::TwoFactorRequired,
            AuthError::BadCredentials => AppError::Unauthorized,
            AuthError::NoSession => AppError::Unauthorized,
            AuthError::CsrfNotFound => {
                AppError::MissingField("csrf".to_string())
            }
            AuthError::Unexpected(status) => AppError::Unexpected(status),
            AuthError::Network(e) => AppError::Network(e),
            AuthError::Json(e) => AppError::Json(e),
        }
    }
}
