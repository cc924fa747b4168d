use serde::{Deserialize, Serialize};

/// Authentication level reported by the service in `spHeader.authLevel`
///
/// `UserRemembered` means the device is trusted and password authentication
/// may proceed without a challenge; anything below that requires two-factor
/// verification before the password step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthLevel {
    /// No authentication progress yet
    None,
    /// The username was recognized but the device is not trusted
    UserIdentified,
    /// The username was recognized on a trusted device
    UserRemembered,
    /// A two-factor challenge was completed for this device
    DeviceAuthorized,
    /// Two-factor verification is pending
    MfaRequired,
    /// Fully authenticated session
    SessionAuthenticated,
    /// Any level this client does not know about
    #[serde(other)]
    Unknown,
}

/// Response envelope block carrying status and metadata for an API call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpHeader {
    /// Envelope format version
    #[serde(rename = "SP_HEADER_VERSION")]
    pub sp_header_version: Option<i64>,
    /// Whether the call succeeded at the business level
    pub success: Option<bool>,
    /// Business status string (e.g. "ACTIVE", "LOCKED")
    pub status: Option<String>,
    /// Authentication level of the current session
    pub auth_level: Option<AuthLevel>,
    /// CSRF token to use for subsequent calls
    pub csrf: Option<String>,
    /// Username the session belongs to
    pub username: Option<String>,
    /// Identifier of the person the session belongs to
    pub person_id: Option<i64>,
    /// Onboarding stage of the user
    pub user_stage: Option<String>,
    /// Whether the account is delinquent
    pub is_delinquent: Option<bool>,
    /// Whether the user is a qualified lead
    pub qualified_lead: Option<bool>,
    /// Names of the account states present in the response
    pub accounts_meta_data: Option<Vec<String>>,
    /// Business-level errors, reported in the header and never raised by this client
    pub errors: Option<Vec<SpError>>,
}

/// Business-level error reported inside `spHeader.errors`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpError {
    /// Numeric error code
    pub code: Option<i64>,
    /// Human-readable message
    pub message: Option<String>,
}

/// Raw response envelope: header block plus the endpoint payload block
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    /// Status and metadata for the call
    #[serde(rename = "spHeader")]
    pub sp_header: SpHeader,
    /// Endpoint payload; each endpoint nests its data under a fixed sub-key
    /// or uses the block directly
    #[serde(rename = "spData", default)]
    pub sp_data: serde_json::Value,
}
