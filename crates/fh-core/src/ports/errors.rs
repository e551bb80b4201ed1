use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    /// No live session exists on the provider side (never signed in,
    /// already signed out, or expired).
    #[error("no active session")]
    SessionMissing,

    #[error("identity provider rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("identity provider unreachable: {0}")]
    Transport(String),

    #[error("unexpected identity provider response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DonationRepositoryError {
    #[error("not authorized to access donations")]
    Unauthorized,

    #[error("datastore rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("datastore unreachable: {0}")]
    Transport(String),

    #[error("unexpected datastore response: {0}")]
    Decode(String),

    #[error("storage error: {0}")]
    Storage(String),
}
