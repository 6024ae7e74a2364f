//! Session state and round history.
//!
//! A [`Session`] is one timed play-through: a rule snapshot, a clock
//! anchored at `started_at`, the numbers drawn so far, the answered
//! rounds, and the running score. There is no background timer; "time's
//! up" is a predicate over two timestamps, evaluated at the top of every
//! operation that touches the session. Once `ended_at` is set the
//! session is terminal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EndReason, EngineError, EngineResult};
use crate::rule::{GameId, RuleSet};

/// Unique identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// One number-draw-and-answer cycle. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    /// The number the player was shown.
    pub number: i64,
    /// The canonical answer for that number.
    pub expected_answer: String,
    /// What the player actually typed.
    pub player_answer: String,
    /// Whether the submission matched.
    pub is_correct: bool,
}

/// What a collaborator learns from an accepted submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOutcome {
    /// Whether the submission matched the expected answer.
    pub correct: bool,
    /// The canonical answer, for feedback display.
    pub expected: String,
    /// The expiry check taken at the start of the call. An expired
    /// session fails the submission instead, so this is false whenever
    /// an outcome is returned at all.
    pub session_over: bool,
}

/// A live or final score snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResult {
    /// Rounds answered so far.
    pub total_answers: u32,
    /// Correct submissions.
    pub correct_count: u32,
    /// Incorrect submissions.
    pub incorrect_count: u32,
    /// Accuracy percentage in `[0, 100]`.
    pub accuracy: u32,
    /// Whether the session has ended.
    pub completed: bool,
}

/// One timed play-through with its own clock, history, and score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    game_id: GameId,
    rules: RuleSet,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    duration_secs: u32,
    used_numbers: Vec<i64>,
    rounds: Vec<Round>,
    correct_count: u32,
    incorrect_count: u32,
}

impl Session {
    /// Start a session over a rule snapshot. The snapshot is owned: rule
    /// edits on the game after this point never reach the session.
    pub(crate) fn new(game_id: GameId, rules: RuleSet, duration_secs: u32) -> Self {
        Self {
            id: SessionId::new(),
            game_id,
            rules,
            started_at: Utc::now(),
            ended_at: None,
            duration_secs,
            used_numbers: Vec::new(),
            rounds: Vec::new(),
            correct_count: 0,
            incorrect_count: 0,
        }
    }

    /// The session's unique ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The game this session was started from.
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    /// The rule snapshot taken when the session started.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// When the session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the session ended, if it has.
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// The session's time budget in seconds.
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Numbers drawn so far, in draw order.
    pub fn used_numbers(&self) -> &[i64] {
        &self.used_numbers
    }

    /// Answered rounds, in play order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Correct submissions so far.
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// Incorrect submissions so far.
    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    /// Whether the session has ended.
    pub fn is_ended(&self) -> bool {
        self.ended_at.is_some()
    }

    /// The most recently drawn number, if any.
    pub fn last_number(&self) -> Option<i64> {
        self.used_numbers.last().copied()
    }

    /// Whole seconds elapsed since the session started.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_seconds()
    }

    /// Whole seconds left on the clock; 0 once ended or expired.
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> i64 {
        if self.is_ended() {
            return 0;
        }
        (i64::from(self.duration_secs) - self.elapsed_secs(now)).max(0)
    }

    /// Whether the time budget is spent at `now`.
    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        self.elapsed_secs(now) >= i64::from(self.duration_secs)
    }

    /// Reject operations on a session that is no longer active.
    ///
    /// A session that expired without anyone noticing is ended here, as
    /// a side effect of the observation.
    pub(crate) fn guard_active(&mut self, now: DateTime<Utc>) -> EngineResult<()> {
        if self.is_ended() {
            return Err(EngineError::SessionEnded(EndReason::Completed));
        }
        if self.expired_at(now) {
            self.ended_at = Some(now);
            return Err(EngineError::SessionEnded(EndReason::TimeUp));
        }
        Ok(())
    }

    /// End the session. Idempotent: the first end time sticks.
    pub(crate) fn end_at(&mut self, now: DateTime<Utc>) {
        if self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }

    pub(crate) fn record_draw(&mut self, number: i64) {
        self.used_numbers.push(number);
    }

    pub(crate) fn record_round(&mut self, round: Round) {
        if round.is_correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }
        self.rounds.push(round);
    }

    /// Shift the start time into the past, for expiry tests.
    #[cfg(test)]
    pub(crate) fn backdate_start(&mut self, secs: i64) {
        self.started_at -= chrono::Duration::seconds(secs);
    }
}
