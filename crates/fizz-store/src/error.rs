//! Error types for game and session storage.

use thiserror::Error;

use fizz_engine::{GameId, SessionId};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No game with the given ID exists.
    #[error("game not found: {0}")]
    GameNotFound(GameId),

    /// No session with the given ID exists.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    /// A game with the same name already exists.
    #[error("a game named \"{0}\" already exists")]
    DuplicateGameName(String),
}
