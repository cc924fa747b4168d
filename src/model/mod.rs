/// Typed result containers over the response envelope
pub mod envelope;
/// Request parameter models for API calls
pub mod requests;
