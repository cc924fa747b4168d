/// HTTP transport: the generic fetch over the authenticated session
pub mod http_client;
