use crate::error::{AppError, AuthError};
use crate::session::response::{AuthLevel, SpHeader};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Two-factor verification method to request when the service demands a challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoFactorMethod {
    /// Verification code delivered by SMS
    Sms,
    /// Verification code delivered by email
    Email,
    /// No challenge allowed; login fails if the service demands one
    None,
}

impl fmt::Display for TwoFactorMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwoFactorMethod::Sms => write!(f, "sms"),
            TwoFactorMethod::Email => write!(f, "email"),
            TwoFactorMethod::None => write!(f, "none"),
        }
    }
}

impl FromStr for TwoFactorMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sms" => Ok(TwoFactorMethod::Sms),
            "email" => Ok(TwoFactorMethod::Email),
            "none" => Ok(TwoFactorMethod::None),
            other => Err(format!("unknown two-factor method: {other}")),
        }
    }
}

/// Session state for an authenticated (or partially authenticated) user
///
/// Cookie state lives in the shared HTTP client; this struct carries the CSRF
/// token and the authentication progress reported by the service.
#[derive(Debug, Clone)]
pub struct PcSession {
    /// CSRF token sent with every API call
    pub csrf: String,
    /// Authentication level reported by the last envelope header
    pub auth_level: AuthLevel,
    /// Username the session belongs to
    pub username: String,
}

impl PcSession {
    /// Creates a session from a bare CSRF token
    ///
    /// This is a simplified version for tests and session restore; the auth
    /// level is assumed fully authenticated.
    pub fn new(csrf: String) -> Self {
        Self {
            csrf,
            auth_level: AuthLevel::SessionAuthenticated,
            username: String::new(),
        }
    }

    /// Whether the device is trusted and the password step may proceed directly
    #[must_use]
    pub fn is_remembered(&self) -> bool {
        self.auth_level == AuthLevel::UserRemembered
    }

    /// Whether the session is fully authenticated
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth_level == AuthLevel::SessionAuthenticated
    }

    /// Folds an envelope header into the session state
    ///
    /// The service rotates the CSRF token during user identification and
    /// reports the auth level on every step.
    pub(crate) fn absorb_header(&mut self, header: &SpHeader) {
        if let Some(csrf) = &header.csrf {
            self.csrf = csrf.clone();
        }
        if let Some(level) = header.auth_level {
            self.auth_level = level;
        }
        if let Some(username) = &header.username {
            self.username = username.clone();
        }
    }
}

/// Trait for authenticating with the Personal Capital API
#[async_trait::async_trait]
pub trait PcAuthenticator: Send + Sync {
    /// Attempts a direct username/password login
    ///
    /// Bootstraps a CSRF token, identifies the user and, if the device is
    /// trusted, completes password authentication. When the service demands a
    /// two-factor challenge the partial session is kept internally and
    /// `AuthError::TwoFactorRequired` is returned; the caller continues with
    /// [`challenge`](Self::challenge) and
    /// [`authenticate_code`](Self::authenticate_code).
    async fn login(&self) -> Result<PcSession, AuthError>;

    /// Requests a two-factor challenge for the given method
    async fn challenge(&self, method: TwoFactorMethod) -> Result<(), AuthError>;

    /// Submits a two-factor verification code for the given method
    async fn authenticate_code(
        &self,
        method: TwoFactorMethod,
        code: &str,
    ) -> Result<(), AuthError>;

    /// Completes authentication with the account password
    async fn authenticate_password(&self) -> Result<PcSession, AuthError>;

    /// Returns the current session, if any
    async fn current_session(&self) -> Option<PcSession>;

    /// Replaces the current session, e.g. with one restored from elsewhere
    async fn restore_session(&self, session: PcSession);

    /// Discards the current session
    async fn logout(&self);
}

/// Source of two-factor verification codes
///
/// The default implementation reads from the console; non-interactive callers
/// provide their own.
pub trait TwoFactorPrompt: Send + Sync {
    /// Produces the verification code for a pending challenge
    fn code(&self, method: TwoFactorMethod) -> Result<String, AppError>;
}

/// Console prompt for two-factor codes
///
/// Blocks the calling thread on stdin, matching the interactive login flow.
pub struct StdinPrompt;

impl TwoFactorPrompt for StdinPrompt {
    fn code(&self, method: TwoFactorMethod) -> Result<String, AppError> {
        let label = match method {
            TwoFactorMethod::Sms => "SMS",
            TwoFactorMethod::Email => "Email",
            TwoFactorMethod::None => "2FA",
        };
        let mut stdout = std::io::stdout();
        write!(stdout, "{label} Code: ")?;
        stdout.flush()?;

        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Adapter turning a closure into a [`TwoFactorPrompt`]
pub struct FnPrompt<F>(pub F);

impl<F> TwoFactorPrompt for FnPrompt<F>
where
    F: Fn(TwoFactorMethod) -> Result<String, AppError> + Send + Sync,
{
    fn code(&self, method: TwoFactorMethod) -> Result<String, AppError> {
        (self.0)(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_factor_method_from_str() {
        assert_eq!("sms".parse::<TwoFactorMethod>(), Ok(TwoFactorMethod::Sms));
        assert_eq!("EMAIL".parse::<TwoFactorMethod>(), Ok(TwoFactorMethod::Email));
        assert_eq!("none".parse::<TwoFactorMethod>(), Ok(TwoFactorMethod::None));
        assert!("push".parse::<TwoFactorMethod>().is_err());
    }

    #[test]
    fn test_session_absorb_header() {
        let mut session = PcSession::new("old-token".to_string());
        let header: SpHeader = serde_json::from_str(
            r#"{"csrf":"new-token","authLevel":"USER_IDENTIFIED","username":"user@example.com"}"#,
        )
        .unwrap();

        session.absorb_header(&header);
        assert_eq!(session.csrf, "new-token");
        assert_eq!(session.auth_level, AuthLevel::UserIdentified);
        assert_eq!(session.username, "user@example.com");
        assert!(!session.is_remembered());
    }

    #[test]
    fn test_session_absorb_header_keeps_existing_fields() {
        let mut session = PcSession::new("token".to_string());
        session.absorb_header(&SpHeader::default());
        assert_eq!(session.csrf, "token");
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_closure_prompt() {
        let prompt = FnPrompt(|_method: TwoFactorMethod| Ok("1234".to_string()));
        assert_eq!(prompt.code(TwoFactorMethod::Sms).unwrap(), "1234");
    }
}
