/// Authentication handler for the Personal Capital API
pub mod auth;
/// Session state, two-factor types and the authenticator trait
pub mod interface;
/// Envelope header and authentication response models
pub mod response;
