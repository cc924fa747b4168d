/// User agent string used in HTTP requests to identify this client to the Personal Capital API
pub const USER_AGENT: &str = "Rust-PC-Client/0.1.0";
/// Default base URL for the Personal Capital web application
pub const DEFAULT_BASE_URL: &str = "https://home.personalcapital.com";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Value of the `apiClient` form field sent with every API call
pub const API_CLIENT: &str = "WEB";
/// Value of the `lastServerChangeId` form field sent with every API call
pub const LAST_SERVER_CHANGE_ID: &str = "-1";
/// Value of the `challengeReason` form field used during two-factor challenges
pub const CHALLENGE_REASON: &str = "DEVICE_AUTH";
/// Value of the `challengeMethod` form field used during two-factor challenges
pub const CHALLENGE_METHOD: &str = "OP";
/// Page fetched to bootstrap a CSRF token before the first API call
pub const LOGIN_PAGE_PATH: &str = "/page/login/goHome";

/// Endpoint identifying the user and reporting the required auth level
pub const IDENTIFY_USER_ENDPOINT: &str = "/login/identifyUser";
/// Endpoint requesting an SMS two-factor challenge
pub const CHALLENGE_SMS_ENDPOINT: &str = "/credential/challengeSms";
/// Endpoint submitting an SMS two-factor code
pub const AUTHENTICATE_SMS_ENDPOINT: &str = "/credential/authenticateSms";
/// Endpoint requesting an email two-factor challenge
pub const CHALLENGE_EMAIL_ENDPOINT: &str = "/credential/challengeEmail";
/// Endpoint submitting an email two-factor code
pub const AUTHENTICATE_EMAIL_ENDPOINT: &str = "/credential/authenticateEmail";
/// Endpoint completing authentication with the account password
pub const AUTHENTICATE_PASSWORD_ENDPOINT: &str = "/credential/authenticatePassword";

/// Endpoint returning all aggregated accounts
pub const ACCOUNTS_ENDPOINT: &str = "/newaccount/getAccounts2";
/// Endpoint returning the transaction category catalogue
pub const CATEGORIES_ENDPOINT: &str = "/transactioncategory/getCategories";
/// Endpoint returning the profile of the logged-in person
pub const PERSON_ENDPOINT: &str = "/person/getPerson";
/// Endpoint returning messages addressed to the user
pub const USER_MESSAGES_ENDPOINT: &str = "/message/getUserMessages";
/// Endpoint returning balance, net worth and summary histories
pub const HISTORIES_ENDPOINT: &str = "/account/getHistories";
/// Endpoint returning user transactions
pub const USER_TRANSACTIONS_ENDPOINT: &str = "/transaction/getUserTransactions";
