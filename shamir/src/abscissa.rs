//! Share x-coordinate selection.
//!
//! Every share needs a nonzero x-coordinate that is unique within its
//! sharing session; evaluating at zero would hand out the secret itself,
//! and a repeated coordinate makes reconstruction degenerate.

use std::collections::HashSet;

use num_bigint::BigUint;
use rand::TryRngCore;

use math::Field;

use crate::error::{ShamirError, ShamirResult};
use crate::sampling;

/// How share x-coordinates are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbscissaMode {
    /// 1, 2, .., n. Deterministic and sufficient for correctness.
    Sequential,
    /// Distinct nonzero elements drawn uniformly from [1, p), for sessions
    /// where the x-coordinates themselves must not be predictable.
    Random,
}

/// Consecutive collisions tolerated per coordinate before the selector
/// reports its entropy source as broken. Collisions are vanishingly rare
/// at the field sizes this scheme is run with, so the budget is generous.
const MAX_REDRAWS: usize = 64;

/// Select n pairwise-distinct nonzero x-coordinates.
///
/// n must be smaller than the modulus; the field holds no more distinct
/// nonzero elements than that.
pub fn select_abscissas<R>(
    n: usize,
    field: &Field,
    mode: AbscissaMode,
    rng: &mut R,
) -> ShamirResult<Vec<BigUint>>
where
    R: TryRngCore + ?Sized,
{
    match mode {
        AbscissaMode::Sequential => Ok((1..=n).map(BigUint::from).collect()),
        AbscissaMode::Random => select_random(n, field, rng),
    }
}

fn select_random<R>(n: usize, field: &Field, rng: &mut R) -> ShamirResult<Vec<BigUint>>
where
    R: TryRngCore + ?Sized,
{
    let mut seen = HashSet::with_capacity(n);
    let mut abscissas = Vec::with_capacity(n);

    while abscissas.len() < n {
        let mut redraws = 0;
        loop {
            let candidate = sampling::uniform_nonzero_element(field, rng)?;
            if seen.insert(candidate.clone()) {
                abscissas.push(candidate);
                break;
            }
            redraws += 1;
            log::warn!("abscissa collision, redrawing ({redraws}/{MAX_REDRAWS})");
            if redraws == MAX_REDRAWS {
                return Err(ShamirError::RandomSourceFailure(format!(
                    "abscissa sampling collided {MAX_REDRAWS} times in a row"
                )));
            }
        }
    }

    Ok(abscissas)
}
