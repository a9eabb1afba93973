//! Error types for the stage

use sconce_core::ActorId;
use thiserror::Error;

/// Stage errors
#[derive(Debug, Error)]
pub enum StageError {
    /// No actor with this id
    #[error("no actor on stage with id {0}")]
    ActorNotFound(ActorId),

    /// The actor exists but is not a light switch
    #[error("{0} is not a light switch")]
    NotASwitch(ActorId),

    /// The actor exists but is not a roaming body
    #[error("{0} is not a roaming body")]
    NotABody(ActorId),
}

/// Result type for stage operations
pub type Result<T> = std::result::Result<T, StageError>;
