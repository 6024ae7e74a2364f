//! Divisor→word rules, rule sets, and game definitions.
//!
//! A [`RuleSet`] is validated at construction and ordered once: rules are
//! sorted ascending by `sort_order` with ties keeping their insertion
//! order. Sessions snapshot the rule set when they start, so editing a
//! game never alters a play-through already in flight.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Maximum length of a replacement word, in Unicode scalar values.
pub const MAX_WORD_CHARS: usize = 20;

/// Unique identifier for a game definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

impl GameId {
    /// Generate a new random game ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A single divisor→word rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Numbers divisible by this value produce `word`. Always ≥ 1.
    pub divisor: i64,
    /// The word appended to the answer when the divisor matches.
    pub word: String,
    /// Position of this rule's word in multi-match answers.
    pub sort_order: u32,
}

impl Rule {
    /// Create a rule. Validation happens when the rule joins a [`RuleSet`].
    pub fn new(divisor: i64, word: impl Into<String>, sort_order: u32) -> Self {
        Self {
            divisor,
            word: word.into(),
            sort_order,
        }
    }
}

/// An ordered, validated collection of rules.
///
/// Serialized as a bare rule list; deserialization re-runs validation,
/// so hand-edited game files cannot smuggle in duplicate divisors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl TryFrom<Vec<Rule>> for RuleSet {
    type Error = EngineError;

    fn try_from(rules: Vec<Rule>) -> EngineResult<Self> {
        Self::new(rules)
    }
}

impl From<RuleSet> for Vec<Rule> {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}

impl RuleSet {
    /// Build a rule set, sorting by `sort_order` (stable on ties).
    ///
    /// Fails with [`EngineError::InvalidArgument`] if the set is empty,
    /// a divisor repeats or is below 1, or a word is blank or longer
    /// than [`MAX_WORD_CHARS`].
    pub fn new(mut rules: Vec<Rule>) -> EngineResult<Self> {
        if rules.is_empty() {
            return Err(EngineError::InvalidArgument(
                "a game needs at least one rule".into(),
            ));
        }

        let mut seen = HashSet::new();
        for rule in &rules {
            if rule.divisor < 1 {
                return Err(EngineError::InvalidArgument(format!(
                    "divisor must be positive, got {}",
                    rule.divisor
                )));
            }
            if !seen.insert(rule.divisor) {
                return Err(EngineError::InvalidArgument(format!(
                    "duplicate divisor: {}",
                    rule.divisor
                )));
            }
            if rule.word.trim().is_empty() {
                return Err(EngineError::InvalidArgument(format!(
                    "replacement word for divisor {} is empty",
                    rule.divisor
                )));
            }
            if rule.word.chars().count() > MAX_WORD_CHARS {
                return Err(EngineError::InvalidArgument(format!(
                    "replacement word \"{}\" exceeds {MAX_WORD_CHARS} characters",
                    rule.word
                )));
            }
        }

        rules.sort_by_key(|r| r.sort_order);
        Ok(Self { rules })
    }

    /// The rules in answer order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the set has no rules (never, for a constructed set).
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A game definition: named rule set with authoring metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    name: String,
    author: String,
    created_at: DateTime<Utc>,
    rules: RuleSet,
}

impl Game {
    /// Create a game definition. Fails if the name is blank.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        rules: RuleSet,
    ) -> EngineResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::InvalidArgument("game name is empty".into()));
        }
        Ok(Self {
            id: GameId::new(),
            name,
            author: author.into(),
            created_at: Utc::now(),
            rules,
        })
    }

    /// The game's unique ID.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// The game's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Who authored the game.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// When the game was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The game's rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
