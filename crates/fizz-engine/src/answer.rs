//! Expected-answer computation.
//!
//! The canonical answer for a number is the concatenation of every
//! matching rule's word in rule-set order, or the number itself in
//! decimal when nothing matches. The `sort_order` field is the only
//! ordering that counts: `{5→"Buzz", order 0}` and `{3→"Fizz", order 1}`
//! make 15 answer `"BuzzFizz"`, not `"FizzBuzz"`.

use crate::error::{EngineError, EngineResult};
use crate::rule::RuleSet;

/// Compute the expected answer for `number` under `rules`.
///
/// Fails with [`EngineError::InvalidArgument`] when `number < 1`.
/// Deterministic, no side effects.
pub fn compute_answer(number: i64, rules: &RuleSet) -> EngineResult<String> {
    if number < 1 {
        return Err(EngineError::InvalidArgument(format!(
            "number must be positive, got {number}"
        )));
    }

    let mut answer = String::new();
    for rule in rules.rules() {
        if number % rule.divisor == 0 {
            answer.push_str(&rule.word);
        }
    }

    if answer.is_empty() {
        Ok(number.to_string())
    } else {
        Ok(answer)
    }
}
