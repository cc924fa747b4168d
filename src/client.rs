//! Simplified client for the Personal Capital API
//!
//! This module provides the session facade: a simplified login flow with a
//! two-factor retry branch, and a set of named read accessors that each issue
//! one request through the generic fetch and repackage the response envelope
//! into a typed result container.
//!
//! # Example
//! ```ignore
//! use pc_client::client::PcClient;
//! use pc_client::config::Config;
//! use pc_client::session::interface::StdinPrompt;
//!
//! let client = PcClient::new(Config::new())?;
//! client.quick_login(&StdinPrompt).await?;
//!
//! let accounts = client.accounts().await?;
//! for account in &accounts {
//!     println!("{:?}", account.name);
//! }
//! ```

use crate::config::Config;
use crate::constants::{
    ACCOUNTS_ENDPOINT, CATEGORIES_ENDPOINT, HISTORIES_ENDPOINT, PERSON_ENDPOINT,
    USER_MESSAGES_ENDPOINT, USER_TRANSACTIONS_ENDPOINT,
};
use crate::error::{AppError, AuthError};
use crate::model::envelope::{ApiList, ApiObject};
use crate::model::requests::{HistoryKind, HistoryQuery, TransactionQuery};
use crate::presentation::{
    Account, AccountHistory, AccountSummary, NetworthHistory, Person, Transaction,
    TransactionCategory, UserMessage,
};
use crate::session::auth::PcAuth;
use crate::session::interface::{PcAuthenticator, PcSession, TwoFactorMethod, TwoFactorPrompt};
use crate::transport::http_client::{PcHttpClient, PcHttpClientImpl};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Session facade over the Personal Capital API
///
/// Owns no state beyond what the shared HTTP client (cookies) and the
/// authentication manager (CSRF token) already hold. Constructed once and
/// used for the duration of a logged-in session.
pub struct PcClient {
    config: Arc<Config>,
    auth: Arc<PcAuth>,
    transport: PcHttpClientImpl,
}

impl PcClient {
    /// Creates a new client
    ///
    /// Builds one cookie-holding HTTP client and shares it between the
    /// authentication layer and the transport; no request is issued until
    /// [`quick_login`](Self::quick_login) or an accessor is called.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http = PcHttpClientImpl::build_http_client(&config)?;
        let auth = Arc::new(PcAuth::new(config.clone(), http.clone()));
        let transport = PcHttpClientImpl::new(config.clone(), http);

        Ok(Self {
            config,
            auth,
            transport,
        })
    }

    /// Logs in with the configured two-factor method
    ///
    /// See [`quick_login_with`](Self::quick_login_with).
    pub async fn quick_login(&self, prompt: &dyn TwoFactorPrompt) -> Result<PcSession, AppError> {
        self.quick_login_with(self.config.two_factor, prompt).await
    }

    /// Logs in, following the two-factor challenge path when required
    ///
    /// Attempts a direct login first. When the service demands a two-factor
    /// challenge the requested method is honored: `Sms` and `Email` run their
    /// challenge and code-submission steps with a code obtained from
    /// `prompt`, then complete password authentication;
    /// `TwoFactorMethod::None` fails with [`AppError::TwoFactorRequired`].
    ///
    /// # Arguments
    /// * `method` - Two-factor method to use when a challenge is demanded
    /// * `prompt` - Source of the verification code
    ///
    /// # Returns
    /// * `Ok(PcSession)` - Fully authenticated session
    /// * `Err(AppError)` - If any login step fails
    pub async fn quick_login_with(
        &self,
        method: TwoFactorMethod,
        prompt: &dyn TwoFactorPrompt,
    ) -> Result<PcSession, AppError> {
        match self.auth.login().await {
            Ok(session) => Ok(session),
            Err(AuthError::TwoFactorRequired) => {
                if method == TwoFactorMethod::None {
                    return Err(AppError::TwoFactorRequired);
                }
                info!("Following {} two-factor path", method);
                self.auth.challenge(method).await?;
                let code = prompt.code(method)?;
                self.auth.authenticate_code(method, &code).await?;
                Ok(self.auth.authenticate_password().await?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the current session, if any
    pub async fn session(&self) -> Option<PcSession> {
        self.auth.current_session().await
    }

    /// Replaces the current session, e.g. with one restored from elsewhere
    ///
    /// Only the CSRF token travels with the session; cookie state must
    /// already be present in this client for restored sessions to work.
    pub async fn restore_session(&self, session: PcSession) {
        self.auth.restore_session(session).await;
    }

    /// Discards the current session
    pub async fn logout(&self) {
        self.auth.logout().await;
    }

    /// Generic fetch for all accessors
    ///
    /// Requires a session, issues one request and returns the decoded body.
    /// HTTP-status validation happens in the transport; business failures
    /// reported inside `spHeader` are not raised.
    async fn fetch(
        &self,
        endpoint: &str,
        params: Vec<(String, String)>,
    ) -> Result<Value, AppError> {
        let session = self
            .auth
            .current_session()
            .await
            .ok_or(AppError::Unauthorized)?;
        self.transport.fetch(&session, endpoint, &params).await
    }

    /// Gets all aggregated accounts
    ///
    /// The list holds `spData.accounts`; aggregate figures such as net worth
    /// stay available in the container's `extra` fields.
    pub async fn accounts(&self) -> Result<ApiList<Account>, AppError> {
        let raw = self.fetch(ACCOUNTS_ENDPOINT, Vec::new()).await?;
        let list = ApiList::from_envelope(raw, Some("accounts"))?;
        debug!("Fetched {} accounts", list.len());
        Ok(list)
    }

    /// Gets the transaction category catalogue
    pub async fn categories(&self) -> Result<ApiList<TransactionCategory>, AppError> {
        let raw = self.fetch(CATEGORIES_ENDPOINT, Vec::new()).await?;
        let list = ApiList::from_envelope(raw, None)?;
        debug!("Fetched {} categories", list.len());
        Ok(list)
    }

    /// Gets the profile of the logged-in person
    pub async fn person(&self) -> Result<ApiObject<Person>, AppError> {
        let raw = self.fetch(PERSON_ENDPOINT, Vec::new()).await?;
        ApiObject::from_envelope(raw)
    }

    /// Gets messages addressed to the user
    pub async fn user_messages(&self) -> Result<ApiList<UserMessage>, AppError> {
        let raw = self.fetch(USER_MESSAGES_ENDPOINT, Vec::new()).await?;
        let list = ApiList::from_envelope(raw, Some("userMessages"))?;
        debug!("Fetched {} user messages", list.len());
        Ok(list)
    }

    /// Gets per-account balance histories
    pub async fn balances_histories(
        &self,
        query: &HistoryQuery,
    ) -> Result<ApiList<AccountHistory>, AppError> {
        self.histories(query, HistoryKind::Balances).await
    }

    /// Gets the aggregated net worth history
    pub async fn net_worth_histories(
        &self,
        query: &HistoryQuery,
    ) -> Result<ApiList<NetworthHistory>, AppError> {
        self.histories(query, HistoryKind::Networth).await
    }

    /// Gets per-account summary histories
    pub async fn summary_histories(
        &self,
        query: &HistoryQuery,
    ) -> Result<ApiList<AccountSummary>, AppError> {
        self.histories(query, HistoryKind::Summaries).await
    }

    /// Shared implementation of the three history accessors
    async fn histories<T: DeserializeOwned>(
        &self,
        query: &HistoryQuery,
        kind: HistoryKind,
    ) -> Result<ApiList<T>, AppError> {
        let raw = self
            .fetch(HISTORIES_ENDPOINT, query.to_params(kind))
            .await?;
        let list = ApiList::from_envelope(raw, Some(kind.extract_key()))?;
        debug!("Fetched {} history points", list.len());
        Ok(list)
    }

    /// Gets transactions for the given criteria
    pub async fn user_transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<ApiList<Transaction>, AppError> {
        let raw = self
            .fetch(USER_TRANSACTIONS_ENDPOINT, query.to_params())
            .await?;
        let list = ApiList::from_envelope(raw, Some("transactions"))?;
        debug!("Fetched {} transactions", list.len());
        Ok(list)
    }

    /// Gets a reference to the authentication manager
    pub fn auth(&self) -> &PcAuth {
        &self.auth
    }
}
