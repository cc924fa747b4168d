use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REST_TIMEOUT};
use crate::session::interface::TwoFactorMethod;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Personal Capital API
pub struct Credentials {
    /// Username for the Personal Capital account
    pub username: String,
    /// Password for the Personal Capital account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Personal Capital web application
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Personal Capital API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Two-factor method to request when the service demands a challenge
    pub two_factor: TwoFactorMethod,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Loads `.env` first, then reads `PC_USERNAME`, `PC_PASSWORD`,
    /// `PC_BASE_URL`, `PC_REST_TIMEOUT` and `PC_TWO_FACTOR`.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("PC_USERNAME", String::from("default_username"));
        let password = get_env_or_default("PC_PASSWORD", String::from("default_password"));

        // Check if we are using default values
        if username == "default_username" {
            error!("PC_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("PC_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("PC_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("PC_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            two_factor: get_env_or_default("PC_TWO_FACTOR", TwoFactorMethod::Sms),
        }
    }

    /// Creates a configuration with explicit credentials and base URL
    ///
    /// Useful for tests and for callers that do not rely on the environment.
    pub fn with_credentials(username: &str, password: &str, base_url: &str) -> Self {
        Config {
            credentials: Credentials {
                username: username.to_string(),
                password: password.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_REST_TIMEOUT,
            },
            two_factor: TwoFactorMethod::Sms,
        }
    }
}
