//! Share generation: evaluate the sharing polynomial at each abscissa.

use num_bigint::BigUint;

use math::{Field, Polynomial};

use crate::error::{ShamirError, ShamirResult};
use crate::share::Share;

/// Evaluate `polynomial` at every abscissa, producing one share each.
///
/// The polynomial length is the threshold k. Fewer abscissas than k would
/// make the secret unrecoverable, so that configuration is rejected before
/// any arithmetic. Each evaluation is independent of the others and every
/// intermediate value stays reduced mod p.
pub fn generate_shares(
    polynomial: &Polynomial,
    abscissas: &[BigUint],
    field: &Field,
) -> ShamirResult<Vec<Share>> {
    let threshold = polynomial.threshold();
    if threshold > abscissas.len() {
        return Err(ShamirError::ThresholdExceedsShareCount {
            threshold,
            share_count: abscissas.len(),
        });
    }

    log::debug!(
        "generating {} shares at threshold {threshold}",
        abscissas.len()
    );
    Ok(abscissas
        .iter()
        .map(|x| Share::new(x.clone(), polynomial.evaluate(x, field)))
        .collect())
}
