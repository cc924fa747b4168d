//! # pc-client
//!
//! A typed async client for the Personal Capital personal-finance
//! aggregation API.
//!
//! The crate wraps the service's cookie-plus-CSRF session protocol behind a
//! small facade: [`client::PcClient`] handles the login sequence (including
//! the optional SMS/email two-factor challenge) and exposes named read
//! accessors for accounts, categories, the person profile, user messages,
//! balance/net-worth/summary histories and transactions. Every accessor
//! issues one request and repackages the `spHeader`/`spData` response
//! envelope into a typed container that keeps the header, the extracted
//! payload and the raw body together.
//!
//! ```ignore
//! use pc_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = PcClient::new(Config::new())?;
//!     client.quick_login(&StdinPrompt).await?;
//!
//!     let accounts = client.accounts().await?;
//!     println!("{accounts}");
//!     Ok(())
//! }
//! ```

/// Session facade: simplified login and the named read accessors
pub mod client;
/// Environment-driven configuration
pub mod config;
/// Global constants: endpoints, form field values, defaults
pub mod constants;
/// Error types
pub mod error;
/// Envelope containers and request parameter models
pub mod model;
/// Typed per-endpoint response records
pub mod presentation;
/// Authentication flow and session state
pub mod session;
/// HTTP transport: the generic fetch
pub mod transport;
/// Environment and logging utilities
pub mod utils;

/// Convenience re-exports of the commonly used surface
pub mod prelude;

/// Library version as recorded in the manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
