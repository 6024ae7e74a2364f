//! Persistence collaborator for the trivia engine.
//!
//! The engine owns no storage: it receives session snapshots and hands
//! them back mutated. This crate defines the repository traits that
//! contract ([`GameRepository`], [`SessionRepository`]) and provides
//! [`MemoryStore`], an in-memory reference implementation whose
//! [`update_session`](MemoryStore::update_session) gives each session
//! the serialized read-modify-write the engine's concurrency contract
//! requires.

pub mod error;
pub mod memory;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use repository::{GameRepository, SessionRepository};
