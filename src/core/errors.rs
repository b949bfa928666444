use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum RosterioError {
    /// Referenced user id does not exist. "Already deleted" and "never
    /// existed" are indistinguishable to the caller.
    #[error("User {0} not found")]
    UserNotFound(i64),

    /// Email does not have a valid address shape.
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Missing or malformed required field, with per-field detail.
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Store unavailable or misbehaving; distinct from not-found.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Client-side transport fault: the server could not be reached or
    /// answered outside the CRUD contract.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Client-side image of a validation failure: the server answered 400
    /// and this is the message it sent back.
    #[error("Server rejected input: {0}")]
    RejectedInput(String),
}
