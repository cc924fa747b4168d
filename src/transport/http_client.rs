//! Generic fetch for Personal Capital API endpoints
//!
//! Every API call is a form-encoded POST carrying the session CSRF token.
//! The fetch validates the HTTP status and decodes the JSON body; it does
//! not retry, back off, or rate limit, and it does not inspect the envelope
//! header for business-level failures.

use crate::config::Config;
use crate::constants::{API_CLIENT, LAST_SERVER_CHANGE_ID, USER_AGENT};
use crate::error::AppError;
use crate::session::interface::PcSession;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP client trait for API calls, the seam used by tests and custom transports
#[async_trait]
pub trait PcHttpClient: Send + Sync {
    /// Issues one API call and returns the decoded JSON body
    ///
    /// # Arguments
    /// * `session` - Session carrying the CSRF token
    /// * `endpoint` - API endpoint path (e.g. "/person/getPerson")
    /// * `params` - Endpoint-specific form parameters
    async fn fetch(
        &self,
        session: &PcSession,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, AppError>;
}

/// Default HTTP client implementation
///
/// Shares the cookie-holding `reqwest::Client` with the authentication layer;
/// cookies carry the session affinity, the form carries the CSRF token.
pub struct PcHttpClientImpl {
    config: Arc<Config>,
    http: Client,
}

impl PcHttpClientImpl {
    /// Creates a new transport over an existing HTTP client
    pub fn new(config: Arc<Config>, http: Client) -> Self {
        Self { config, http }
    }

    /// Builds the cookie-holding HTTP client shared by auth and transport
    pub fn build_http_client(config: &Config) -> Result<Client, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(client)
    }

    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/api/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl PcHttpClient for PcHttpClientImpl {
    async fn fetch(
        &self,
        session: &PcSession,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, AppError> {
        let url = self.rest_url(endpoint);

        let mut form: Vec<(String, String)> = vec![
            ("lastServerChangeId".to_string(), LAST_SERVER_CHANGE_ID.to_string()),
            ("csrf".to_string(), session.csrf.clone()),
            ("apiClient".to_string(), API_CLIENT.to_string()),
        ];
        form.extend(params.iter().cloned());

        debug!("POST {}", url);
        let response = self.http.post(&url).form(&form).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            error!("Unauthorized: {}", body);
            return Err(AppError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response.json::<Value>().await?)
    }
}
