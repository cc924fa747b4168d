// Common utilities for integration tests

use pc_client::prelude::*;

pub const TEST_CSRF: &str = "577ad38e-ac4f-4c07-b202-c9c8a9b873b0";
pub const ROTATED_CSRF: &str = "9e0ad38e-aaaa-4c07-b202-c9c8a9b873b0";

/// Creates a client pointed at a mockito server
pub fn create_test_client(base_url: &str) -> PcClient {
    setup_logger();
    let config = Config::with_credentials("user@example.com", "hunter2", base_url);
    PcClient::new(config).expect("Failed to create client")
}

/// Creates a client with an already-restored session, skipping the login flow
pub async fn logged_in_client(base_url: &str) -> PcClient {
    let client = create_test_client(base_url);
    client
        .restore_session(PcSession::new(TEST_CSRF.to_string()))
        .await;
    client
}

/// The login page body the CSRF bootstrap scrapes
pub fn login_page_body() -> String {
    format!("<html><script>window.globals.csrf='{TEST_CSRF}';</script></html>")
}

/// An envelope whose header carries the given auth level and a rotated CSRF token
pub fn auth_envelope(auth_level: &str) -> String {
    format!(
        r#"{{"spHeader":{{"SP_HEADER_VERSION":1,"success":true,"authLevel":"{auth_level}","csrf":"{ROTATED_CSRF}","username":"user@example.com","status":"ACTIVE"}},"spData":{{}}}}"#
    )
}
