//! In-memory reference store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use fizz_engine::{Game, GameId, Session, SessionId};

use crate::error::{StoreError, StoreResult};
use crate::repository::{GameRepository, SessionRepository};

/// A `Mutex`-guarded in-memory store for games and sessions.
///
/// Session mutations go through [`update_session`](Self::update_session),
/// which holds the lock across the whole load-mutate-store cycle. That
/// is the per-session serialization point the engine's concurrency
/// contract asks its collaborator for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: Mutex<HashMap<GameId, Game>>,
    sessions: Mutex<HashMap<SessionId, Session>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically load, mutate, and store one session.
    ///
    /// `f` runs under the store lock; operations on other sessions wait
    /// until it returns. Fails with [`StoreError::SessionNotFound`] for
    /// unknown IDs.
    pub fn update_session<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Session) -> R,
    ) -> StoreResult<R> {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let session = sessions
            .get_mut(&id)
            .ok_or(StoreError::SessionNotFound(id))?;
        Ok(f(session))
    }
}

impl GameRepository for MemoryStore {
    fn all_games(&self) -> StoreResult<Vec<Game>> {
        let games = self.games.lock().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<Game> = games.values().cloned().collect();
        all.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(all)
    }

    fn game_by_id(&self, id: GameId) -> StoreResult<Game> {
        let games = self.games.lock().unwrap_or_else(PoisonError::into_inner);
        games.get(&id).cloned().ok_or(StoreError::GameNotFound(id))
    }

    fn game_by_name(&self, name: &str) -> StoreResult<Option<Game>> {
        let games = self.games.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(games.values().find(|g| g.name() == name).cloned())
    }

    fn create_game(&self, game: Game) -> StoreResult<()> {
        let mut games = self.games.lock().unwrap_or_else(PoisonError::into_inner);
        if games.values().any(|g| g.name() == game.name()) {
            return Err(StoreError::DuplicateGameName(game.name().to_string()));
        }
        games.insert(game.id(), game);
        Ok(())
    }

    fn delete_game(&self, id: GameId) -> StoreResult<()> {
        let mut games = self.games.lock().unwrap_or_else(PoisonError::into_inner);
        games.remove(&id).ok_or(StoreError::GameNotFound(id))?;
        Ok(())
    }
}

impl SessionRepository for MemoryStore {
    fn create_session(&self, session: Session) -> StoreResult<()> {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        sessions.insert(session.id(), session);
        Ok(())
    }

    fn session_by_id(&self, id: SessionId) -> StoreResult<Session> {
        let sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        sessions
            .get(&id)
            .cloned()
            .ok_or(StoreError::SessionNotFound(id))
    }

    fn save_session(&self, session: Session) -> StoreResult<()> {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        sessions.insert(session.id(), session);
        Ok(())
    }
}
