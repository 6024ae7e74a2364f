//! Repository traits the engine's collaborators implement.

use fizz_engine::{Game, GameId, Session, SessionId};

use crate::error::StoreResult;

/// Storage for game definitions.
pub trait GameRepository {
    /// Every stored game.
    fn all_games(&self) -> StoreResult<Vec<Game>>;

    /// Look a game up by ID.
    fn game_by_id(&self, id: GameId) -> StoreResult<Game>;

    /// Look a game up by exact name, if one exists.
    fn game_by_name(&self, name: &str) -> StoreResult<Option<Game>>;

    /// Store a new game. Names are unique; duplicates are rejected.
    fn create_game(&self, game: Game) -> StoreResult<()>;

    /// Remove a game.
    fn delete_game(&self, id: GameId) -> StoreResult<()>;
}

/// Storage for sessions.
///
/// Implementations must serialize mutations per session ID: the engine
/// assumes at most one in-flight mutating operation per session, while
/// distinct sessions may be processed in parallel without limit.
pub trait SessionRepository {
    /// Store a newly started session.
    fn create_session(&self, session: Session) -> StoreResult<()>;

    /// Load a snapshot of a session.
    fn session_by_id(&self, id: SessionId) -> StoreResult<Session>;

    /// Persist a mutated session snapshot.
    fn save_session(&self, session: Session) -> StoreResult<()>;
}
