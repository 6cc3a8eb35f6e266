//! Coefficient generation for the sharing polynomial.

use num_bigint::BigUint;
use rand::TryRngCore;

use math::{Field, Polynomial};

use crate::error::ShamirResult;
use crate::sampling;

/// Generate the k coefficients of a fresh degree k - 1 sharing polynomial,
/// each drawn independently and uniformly from [0, p).
///
/// The constant term is the secret being shared, canonical in [0, p) by
/// construction. Callers that already hold the value to share use
/// [`polynomial_for_secret`] instead.
pub fn generate_coefficients<R>(
    k: usize,
    field: &Field,
    rng: &mut R,
) -> ShamirResult<Polynomial>
where
    R: TryRngCore + ?Sized,
{
    let mut coefficients = Vec::with_capacity(k);
    for _ in 0..k {
        coefficients.push(sampling::uniform_element(field, rng)?);
    }
    Ok(Polynomial::new(coefficients, field))
}

/// Build a sharing polynomial around a caller-supplied secret: the secret
/// reduced mod p as constant term, followed by k - 1 uniform coefficients.
pub fn polynomial_for_secret<R>(
    secret: &BigUint,
    k: usize,
    field: &Field,
    rng: &mut R,
) -> ShamirResult<Polynomial>
where
    R: TryRngCore + ?Sized,
{
    let mut coefficients = Vec::with_capacity(k);
    coefficients.push(field.reduce(secret));
    for _ in 1..k {
        coefficients.push(sampling::uniform_element(field, rng)?);
    }
    Ok(Polynomial::new(coefficients, field))
}
