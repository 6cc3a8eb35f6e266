//! Secret reconstruction by Lagrange interpolation at x = 0.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use math::Field;

use crate::error::{ShamirError, ShamirResult};
use crate::share::Share;

/// Interpolate the sharing polynomial at x = 0 from `shares`.
///
/// With at least k shares carrying distinct abscissas from one session,
/// the result is the original secret. With fewer, the sum still lands on
/// some field element, just one unrelated to the secret; the share count
/// is the caller's contract, and [`reconstruct_with_threshold`] is the
/// asserted variant for callers that want it checked. Two shares with the
/// same abscissa make a basis denominator vanish and surface as a zero
/// denominator error, never as a wrong value.
pub fn reconstruct(shares: &[Share], field: &Field) -> ShamirResult<BigUint> {
    log::debug!("reconstructing from {} shares", shares.len());
    let mut secret = BigUint::zero();

    for (i, share) in shares.iter().enumerate() {
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();

        // L_i(0) = prod over j != i of -x_j / (x_i - x_j)
        for (j, other) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = field.mul(&numerator, &field.neg(&other.x));
            denominator =
                field.mul(&denominator, &field.sub(&share.x, &other.x));
        }

        let basis = field.mul(&numerator, &field.inverse(&denominator)?);
        secret = field.add(&secret, &field.mul(&share.y, &basis));
    }

    Ok(secret)
}

/// [`reconstruct`], but fail up front unless at least `threshold` shares
/// were supplied.
pub fn reconstruct_with_threshold(
    shares: &[Share],
    field: &Field,
    threshold: usize,
) -> ShamirResult<BigUint> {
    if shares.len() < threshold {
        return Err(ShamirError::InsufficientShares {
            required: threshold,
            provided: shares.len(),
        });
    }
    reconstruct(shares, field)
}
