//! Error types for the Session actor.

use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The requested session was not found.
    #[error("Session not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ActorCommunicationError(msg)
    }
}
