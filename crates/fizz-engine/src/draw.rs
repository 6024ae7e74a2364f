//! Non-repeating uniform number draws.

use std::collections::HashSet;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::DrawError;

/// Draw one uniformly random number from `[min, max]` that is not in
/// `used`.
///
/// Fails with [`DrawError::InvalidBounds`] when `min < 1` or
/// `max <= min`, and [`DrawError::Exhausted`] when every number in the
/// range has been used. The caller records the draw; `used` is not
/// mutated here.
pub fn draw_number(
    min: i64,
    max: i64,
    used: &[i64],
    rng: &mut StdRng,
) -> Result<i64, DrawError> {
    if min < 1 || max <= min {
        return Err(DrawError::InvalidBounds { min, max });
    }

    let used: HashSet<i64> = used.iter().copied().collect();
    let pool: Vec<i64> = (min..=max).filter(|n| !used.contains(n)).collect();

    if pool.is_empty() {
        return Err(DrawError::Exhausted { min, max });
    }

    let index = rng.random_range(0..pool.len());
    Ok(pool[index])
}
