//! Authentication module for the Personal Capital API
//!
//! The login sequence is cookie-based: a CSRF token is scraped from the login
//! page, the user is identified, an optional two-factor challenge is
//! completed, and the password finishes the session. The token rotates during
//! identification and is folded back into the session from each envelope
//! header.

use crate::config::Config;
use crate::constants::{
    API_CLIENT, AUTHENTICATE_EMAIL_ENDPOINT, AUTHENTICATE_PASSWORD_ENDPOINT,
    AUTHENTICATE_SMS_ENDPOINT, CHALLENGE_EMAIL_ENDPOINT, CHALLENGE_METHOD, CHALLENGE_REASON,
    CHALLENGE_SMS_ENDPOINT, IDENTIFY_USER_ENDPOINT, LOGIN_PAGE_PATH,
};
use crate::error::AuthError;
use crate::session::interface::{PcAuthenticator, PcSession, TwoFactorMethod};
use crate::session::response::{ApiEnvelope, AuthLevel};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

static CSRF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"globals\.csrf='([a-f0-9-]+)'").expect("csrf regex"));

/// Authentication manager for the Personal Capital API
///
/// Holds the in-progress session across the multi-step login flow so the
/// two-factor branch can continue where identification stopped. The HTTP
/// client is shared with the transport layer because session affinity lives
/// in its cookie store.
pub struct PcAuth {
    config: Arc<Config>,
    http: Client,
    session: Arc<RwLock<Option<PcSession>>>,
}

impl PcAuth {
    /// Creates a new authentication manager
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `http` - Cookie-holding HTTP client shared with the transport layer
    pub fn new(config: Arc<Config>, http: Client) -> Self {
        Self {
            config,
            http,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Builds a full URL for an API endpoint
    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/api/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Fetches the login page and scrapes the initial CSRF token from it
    async fn bootstrap_csrf(&self) -> Result<String, AuthError> {
        let url = format!(
            "{}{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            LOGIN_PAGE_PATH
        );
        debug!("Bootstrapping CSRF token from {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Login page request failed with status {}", status);
            return Err(AuthError::Unexpected(status));
        }

        let body = response.text().await?;
        match CSRF_RE.captures(&body).and_then(|c| c.get(1)) {
            Some(token) => Ok(token.as_str().to_string()),
            None => {
                error!("No CSRF token found in login page");
                Err(AuthError::CsrfNotFound)
            }
        }
    }

    /// Posts a form to an authentication endpoint and decodes the envelope
    async fn auth_post(
        &self,
        endpoint: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<ApiEnvelope, AuthError> {
        let url = self.rest_url(endpoint);
        debug!("POST {}", url);

        let response = self.http.post(&url).form(&params).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            error!("Authentication rejected: {}", body);
            return Err(AuthError::BadCredentials);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Authentication call failed with status {}: {}", status, body);
            return Err(AuthError::Unexpected(status));
        }

        let envelope: ApiEnvelope = response.json().await?;
        Ok(envelope)
    }

    /// Folds an envelope header into the stored session and returns a copy
    async fn absorb(&self, envelope: &ApiEnvelope) -> Option<PcSession> {
        let mut guard = self.session.write().await;
        if let Some(session) = guard.as_mut() {
            session.absorb_header(&envelope.sp_header);
            return Some(session.clone());
        }
        None
    }

    /// Returns the stored session or fails when the flow has not started
    async fn require_session(&self) -> Result<PcSession, AuthError> {
        let guard = self.session.read().await;
        guard.clone().ok_or(AuthError::NoSession)
    }
}

#[async_trait::async_trait]
impl PcAuthenticator for PcAuth {
    async fn login(&self) -> Result<PcSession, AuthError> {
        let username = self.config.credentials.username.clone();
        info!("Logging in as {}", username);

        let csrf = self.bootstrap_csrf().await?;
        {
            let mut guard = self.session.write().await;
            *guard = Some(PcSession {
                csrf: csrf.clone(),
                auth_level: AuthLevel::None,
                username: username.clone(),
            });
        }

        let envelope = self
            .auth_post(
                IDENTIFY_USER_ENDPOINT,
                vec![
                    ("username", username),
                    ("csrf", csrf),
                    ("apiClient", API_CLIENT.to_string()),
                    ("bindDevice", "false".to_string()),
                    ("skipLinkAccount", "false".to_string()),
                    ("redirectTo", String::new()),
                    ("skipFirstUse", String::new()),
                    ("referrerId", String::new()),
                ],
            )
            .await?;

        let session = self
            .absorb(&envelope)
            .await
            .ok_or(AuthError::NoSession)?;

        if session.is_remembered() {
            debug!("Device is remembered, skipping two-factor challenge");
            return self.authenticate_password().await;
        }

        warn!(
            "Two-factor challenge required (auth level: {:?})",
            session.auth_level
        );
        Err(AuthError::TwoFactorRequired)
    }

    async fn challenge(&self, method: TwoFactorMethod) -> Result<(), AuthError> {
        let session = self.require_session().await?;
        let endpoint = match method {
            TwoFactorMethod::Sms => CHALLENGE_SMS_ENDPOINT,
            TwoFactorMethod::Email => CHALLENGE_EMAIL_ENDPOINT,
            TwoFactorMethod::None => return Err(AuthError::TwoFactorRequired),
        };
        info!("Requesting {} challenge", method);

        let envelope = self
            .auth_post(
                endpoint,
                vec![
                    ("challengeReason", CHALLENGE_REASON.to_string()),
                    ("challengeMethod", CHALLENGE_METHOD.to_string()),
                    ("bindDevice", "false".to_string()),
                    ("csrf", session.csrf),
                    ("apiClient", API_CLIENT.to_string()),
                ],
            )
            .await?;

        self.absorb(&envelope).await;
        Ok(())
    }

    async fn authenticate_code(
        &self,
        method: TwoFactorMethod,
        code: &str,
    ) -> Result<(), AuthError> {
        let session = self.require_session().await?;
        let endpoint = match method {
            TwoFactorMethod::Sms => AUTHENTICATE_SMS_ENDPOINT,
            TwoFactorMethod::Email => AUTHENTICATE_EMAIL_ENDPOINT,
            TwoFactorMethod::None => return Err(AuthError::TwoFactorRequired),
        };
        info!("Submitting {} verification code", method);

        let envelope = self
            .auth_post(
                endpoint,
                vec![
                    ("challengeReason", CHALLENGE_REASON.to_string()),
                    ("challengeMethod", CHALLENGE_METHOD.to_string()),
                    ("bindDevice", "false".to_string()),
                    ("code", code.to_string()),
                    ("csrf", session.csrf),
                    ("apiClient", API_CLIENT.to_string()),
                ],
            )
            .await?;

        self.absorb(&envelope).await;
        Ok(())
    }

    async fn authenticate_password(&self) -> Result<PcSession, AuthError> {
        let session = self.require_session().await?;
        debug!("Completing password authentication");

        let envelope = self
            .auth_post(
                AUTHENTICATE_PASSWORD_ENDPOINT,
                vec![
                    ("bindDevice", "false".to_string()),
                    ("deviceName", String::new()),
                    ("redirectTo", String::new()),
                    ("skipFirstUse", String::new()),
                    ("skipLinkAccount", "false".to_string()),
                    ("referrerId", String::new()),
                    ("passwd", self.config.credentials.password.clone()),
                    ("csrf", session.csrf),
                    ("apiClient", API_CLIENT.to_string()),
                ],
            )
            .await?;

        let session = self
            .absorb(&envelope)
            .await
            .ok_or(AuthError::NoSession)?;
        info!("✓ Login successful, user: {}", session.username);
        Ok(session)
    }

    async fn current_session(&self) -> Option<PcSession> {
        self.session.read().await.clone()
    }

    async fn restore_session(&self, session: PcSession) {
        let mut guard = self.session.write().await;
        *guard = Some(session);
    }

    async fn logout(&self) {
        info!("Logging out");
        let mut guard = self.session.write().await;
        *guard = None;
    }
}
