//! The session state machine.
//!
//! [`GameEngine`] ties the pure pieces together: it draws numbers
//! ([`draw`](crate::draw)), computes expected answers
//! ([`answer`](crate::answer)), validates submissions
//! ([`validate`](crate::validate)), and scores results
//! ([`score`](crate::score)). The engine owns the process-wide RNG;
//! sessions are plain data owned by whoever persists them, handed in by
//! mutable reference for each operation. Callers running sessions
//! concurrently must serialize operations per session; distinct
//! sessions are fully independent.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::answer::compute_answer;
use crate::config::EngineConfig;
use crate::draw::draw_number;
use crate::error::{EngineError, EngineResult};
use crate::rule::Game;
use crate::score::accuracy;
use crate::session::{Round, Session, SessionResult, SubmitOutcome};
use crate::validate::is_correct;

/// Runs game sessions: the only stateful entry point of the engine.
pub struct GameEngine {
    config: EngineConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Engine with the default configuration (draws from 1–1000,
    /// RNG seeded from OS entropy).
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine with an explicit configuration. A configured seed makes
    /// the draw sequence reproducible.
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a session against a game, snapshotting its rules.
    ///
    /// Fails with [`EngineError::InvalidArgument`] when `duration_secs`
    /// is zero.
    pub fn start_session(&self, game: &Game, duration_secs: u32) -> EngineResult<Session> {
        if duration_secs == 0 {
            return Err(EngineError::InvalidArgument(
                "session duration must be positive".into(),
            ));
        }
        Ok(Session::new(game.id(), game.rules().clone(), duration_secs))
    }

    /// Draw the next unused number for the session and record it.
    ///
    /// Fails with [`EngineError::SessionEnded`] on an ended or expired
    /// session (ending it if newly expired), and with
    /// [`EngineError::NoNumbersRemaining`] when the configured range is
    /// exhausted.
    pub fn request_number(&mut self, session: &mut Session) -> EngineResult<i64> {
        session.guard_active(Utc::now())?;

        let number = draw_number(
            self.config.number_min,
            self.config.number_max,
            session.used_numbers(),
            &mut self.rng,
        )?;
        session.record_draw(number);
        Ok(number)
    }

    /// Score a submission against the most recently drawn number.
    ///
    /// Fails with [`EngineError::SessionEnded`] under the same expiry
    /// check as [`request_number`](Self::request_number), and with
    /// [`EngineError::NoPriorNumber`] when nothing has been drawn yet.
    /// On success a [`Round`] is recorded and exactly one counter moves.
    pub fn submit_answer(
        &mut self,
        session: &mut Session,
        raw_answer: &str,
    ) -> EngineResult<SubmitOutcome> {
        let now = Utc::now();
        session.guard_active(now)?;
        // Reported flag reflects the same instant the guard checked.
        let session_over = session.expired_at(now);

        let number = session.last_number().ok_or(EngineError::NoPriorNumber)?;
        let expected = compute_answer(number, session.rules())?;
        let correct = is_correct(&expected, raw_answer);

        session.record_round(Round {
            number,
            expected_answer: expected.clone(),
            player_answer: raw_answer.to_string(),
            is_correct: correct,
        });

        Ok(SubmitOutcome {
            correct,
            expected,
            session_over,
        })
    }

    /// End a session now. Idempotent: a second call changes nothing.
    pub fn end_session(&self, session: &mut Session) {
        session.end_at(Utc::now());
    }

    /// Score snapshot, ending the session first if its time is up.
    ///
    /// Callable at any point; mid-session it reports the live score
    /// with `completed == false`.
    pub fn result(&self, session: &mut Session) -> SessionResult {
        let now = Utc::now();
        if !session.is_ended() && session.expired_at(now) {
            session.end_at(now);
        }

        let total = session.correct_count() + session.incorrect_count();
        SessionResult {
            total_answers: total,
            correct_count: session.correct_count(),
            incorrect_count: session.incorrect_count(),
            accuracy: accuracy(session.correct_count(), total),
            completed: session.is_ended(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EndReason;
    use crate::rule::{Rule, RuleSet};

    fn fizzbuzz_game() -> Game {
        let rules =
            RuleSet::new(vec![Rule::new(3, "Fizz", 0), Rule::new(5, "Buzz", 1)]).unwrap();
        Game::new("Classic", "tester", rules).unwrap()
    }

    fn seeded_engine() -> GameEngine {
        GameEngine::with_config(EngineConfig::default().with_seed(42))
    }

    #[test]
    fn zero_duration_rejected() {
        let engine = seeded_engine();
        assert!(matches!(
            engine.start_session(&fizzbuzz_game(), 0),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn draw_then_correct_answer() {
        let mut engine = seeded_engine();
        let game = fizzbuzz_game();
        let mut session = engine.start_session(&game, 60).unwrap();

        let number = engine.request_number(&mut session).unwrap();
        assert_eq!(session.last_number(), Some(number));

        let expected = compute_answer(number, session.rules()).unwrap();
        let outcome = engine.submit_answer(&mut session, &expected).unwrap();
        assert!(outcome.correct);
        assert!(!outcome.session_over);
        assert_eq!(outcome.expected, expected);
        assert_eq!(session.correct_count(), 1);

        let result = engine.result(&mut session);
        assert_eq!(result.total_answers, 1);
        assert_eq!(result.accuracy, 100);
        assert!(!result.completed);
    }

    #[test]
    fn wrong_answer_counts_against() {
        let mut engine = seeded_engine();
        let game = fizzbuzz_game();
        let mut session = engine.start_session(&game, 60).unwrap();

        engine.request_number(&mut session).unwrap();
        let outcome = engine
            .submit_answer(&mut session, "definitely wrong")
            .unwrap();
        assert!(!outcome.correct);
        assert_eq!(session.incorrect_count(), 1);
        assert_eq!(engine.result(&mut session).accuracy, 0);
    }

    #[test]
    fn submit_before_draw_is_protocol_misuse() {
        let mut engine = seeded_engine();
        let game = fizzbuzz_game();
        let mut session = engine.start_session(&game, 60).unwrap();
        assert!(matches!(
            engine.submit_answer(&mut session, "Fizz"),
            Err(EngineError::NoPriorNumber)
        ));
    }

    #[test]
    fn answers_score_against_most_recent_number() {
        let mut engine = seeded_engine();
        let game = fizzbuzz_game();
        let mut session = engine.start_session(&game, 60).unwrap();

        engine.request_number(&mut session).unwrap();
        let second = engine.request_number(&mut session).unwrap();

        let expected = compute_answer(second, session.rules()).unwrap();
        let outcome = engine.submit_answer(&mut session, &expected).unwrap();
        assert!(outcome.correct);
        assert_eq!(session.rounds()[0].number, second);
    }

    #[test]
    fn range_exhaustion_surfaces_as_no_numbers_remaining() {
        let config = EngineConfig::default().with_range(1, 3).with_seed(42);
        let mut engine = GameEngine::with_config(config);
        let game = fizzbuzz_game();
        let mut session = engine.start_session(&game, 60).unwrap();

        for _ in 0..3 {
            engine.request_number(&mut session).unwrap();
        }
        assert!(matches!(
            engine.request_number(&mut session),
            Err(EngineError::NoNumbersRemaining { min: 1, max: 3 })
        ));
    }

    #[test]
    fn expired_session_fails_and_transitions() {
        let mut engine = seeded_engine();
        let game = fizzbuzz_game();
        let mut session = engine.start_session(&game, 60).unwrap();
        session.backdate_start(70);

        assert!(matches!(
            engine.request_number(&mut session),
            Err(EngineError::SessionEnded(EndReason::TimeUp))
        ));
        assert!(session.is_ended());

        assert!(matches!(
            engine.request_number(&mut session),
            Err(EngineError::SessionEnded(EndReason::Completed))
        ));
    }

    #[test]
    fn expired_submission_is_not_counted() {
        let mut engine = seeded_engine();
        let game = fizzbuzz_game();
        let mut session = engine.start_session(&game, 60).unwrap();

        engine.request_number(&mut session).unwrap();
        session.backdate_start(70);

        assert!(matches!(
            engine.submit_answer(&mut session, "Fizz"),
            Err(EngineError::SessionEnded(EndReason::TimeUp))
        ));
        assert_eq!(session.rounds().len(), 0);
        assert_eq!(session.correct_count() + session.incorrect_count(), 0);
    }

    #[test]
    fn result_keeps_counts_accumulated_before_expiry() {
        let mut engine = seeded_engine();
        let game = fizzbuzz_game();
        let mut session = engine.start_session(&game, 60).unwrap();

        let number = engine.request_number(&mut session).unwrap();
        let expected = compute_answer(number, session.rules()).unwrap();
        engine.submit_answer(&mut session, &expected).unwrap();

        session.backdate_start(70);
        let result = engine.result(&mut session);
        assert!(result.completed);
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.accuracy, 100);
        assert!(session.is_ended());
    }

    #[test]
    fn explicit_end_is_idempotent() {
        let mut engine = seeded_engine();
        let game = fizzbuzz_game();
        let mut session = engine.start_session(&game, 60).unwrap();

        engine.end_session(&mut session);
        let first = session.ended_at();
        engine.end_session(&mut session);
        assert_eq!(session.ended_at(), first);

        assert!(matches!(
            engine.request_number(&mut session),
            Err(EngineError::SessionEnded(EndReason::Completed))
        ));
    }

    #[test]
    fn no_attempts_scores_zero() {
        let engine = seeded_engine();
        let game = fizzbuzz_game();
        let mut session = engine.start_session(&game, 60).unwrap();
        let result = engine.result(&mut session);
        assert_eq!(result.total_answers, 0);
        assert_eq!(result.accuracy, 0);
        assert!(!result.completed);
    }

    #[test]
    fn sessions_snapshot_rules_at_start() {
        let engine = seeded_engine();
        let game = fizzbuzz_game();
        let session = engine.start_session(&game, 60).unwrap();
        drop(game);
        // The snapshot answers on its own.
        assert_eq!(compute_answer(15, session.rules()).unwrap(), "FizzBuzz");
    }

    #[test]
    fn seeded_engines_draw_identically() {
        let config = EngineConfig::default().with_seed(7);
        let mut a = GameEngine::with_config(config.clone());
        let mut b = GameEngine::with_config(config);
        let game = fizzbuzz_game();
        let mut sa = a.start_session(&game, 60).unwrap();
        let mut sb = b.start_session(&game, 60).unwrap();

        for _ in 0..10 {
            assert_eq!(
                a.request_number(&mut sa).unwrap(),
                b.request_number(&mut sb).unwrap()
            );
        }
    }
}
