//! Error types for the game session engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why a session is no longer accepting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The session was ended before this call (explicitly or by an
    /// earlier expiry check).
    Completed,
    /// This call found the time budget spent and performed the end
    /// transition itself.
    TimeUp,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "this session is already completed"),
            Self::TimeUp => write!(f, "time's up for this session"),
        }
    }
}

/// Errors that can occur during engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Bad caller input. Recoverable: fix the argument and retry.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The session is terminal. Not retryable; start a new session.
    #[error("session ended: {0}")]
    SessionEnded(EndReason),

    /// Every number in the draw range has been used. The session cannot
    /// continue; callers should end it.
    #[error("all numbers between {min} and {max} have been used")]
    NoNumbersRemaining {
        /// Lower bound of the exhausted range (inclusive).
        min: i64,
        /// Upper bound of the exhausted range (inclusive).
        max: i64,
    },

    /// An answer was submitted before any number was drawn.
    #[error("no number has been drawn for this session yet")]
    NoPriorNumber,
}

/// Errors from the number drawer.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The requested range is malformed (`min < 1` or `max <= min`).
    #[error("invalid draw bounds: [{min}, {max}]")]
    InvalidBounds {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// The candidate pool is empty: every number in range is excluded.
    #[error("all numbers between {min} and {max} have been used")]
    Exhausted {
        /// Lower bound of the exhausted range (inclusive).
        min: i64,
        /// Upper bound of the exhausted range (inclusive).
        max: i64,
    },
}

impl From<DrawError> for EngineError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::InvalidBounds { min, max } => {
                Self::InvalidArgument(format!("invalid draw bounds: [{min}, {max}]"))
            }
            DrawError::Exhausted { min, max } => Self::NoNumbersRemaining { min, max },
        }
    }
}
