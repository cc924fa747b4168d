//! # PC Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use pc_client::prelude::*;
//!
//! let config = Config::with_credentials("user", "pass", "http://localhost");
//! let client = PcClient::new(config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Personal Capital API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error types for the library
pub use crate::error::{AppError, AuthError};

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication handler for the Personal Capital API
pub use crate::session::auth::PcAuth;

/// Session state and the authenticator trait
pub use crate::session::interface::{
    FnPrompt, PcAuthenticator, PcSession, StdinPrompt, TwoFactorMethod, TwoFactorPrompt,
};

/// Envelope header types
pub use crate::session::response::{ApiEnvelope, AuthLevel, SpError, SpHeader};

// ============================================================================
// CLIENT FACADE
// ============================================================================

/// The session facade
pub use crate::client::PcClient;

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::http_client::PcHttpClient;

/// HTTP client implementation
pub use crate::transport::http_client::PcHttpClientImpl;

// ============================================================================
// RESULT CONTAINERS AND REQUEST MODELS
// ============================================================================

/// Typed result containers over the response envelope
pub use crate::model::envelope::{ApiList, ApiObject};

/// Request parameter models
pub use crate::model::requests::{HistoryKind, HistoryQuery, Interval, TransactionQuery};

// ============================================================================
// ENDPOINT MODELS
// ============================================================================

/// Typed per-endpoint records
pub use crate::presentation::{
    Account, AccountHistory, AccountSummary, MessageAction, NetworthHistory, Person, PersonName,
    Transaction, TransactionCategory, UserMessage,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Environment helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date handling
pub use chrono::NaiveDate;
