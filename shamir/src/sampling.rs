//! Uniform field-element sampling from an injected entropy source.
//!
//! Candidates of the modulus bit width are drawn, the excess high bits are
//! masked off, and any candidate at or above the modulus is discarded. A
//! plain `bytes mod p` reduction would skew small residues whenever p is
//! not a power of two, so rejection is the only reduction used here.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::TryRngCore;
use zeroize::Zeroizing;

use math::Field;

use crate::error::{ShamirError, ShamirResult};

/// Draw budget before the sampler gives up on its entropy source.
///
/// Masking to the modulus bit width keeps the acceptance rate above 1/2
/// per draw, so exhausting this budget means the source output is
/// degenerate, not unlucky.
const MAX_DRAWS: usize = 512;

/// A uniformly random element of [0, p).
pub fn uniform_element<R>(field: &Field, rng: &mut R) -> ShamirResult<BigUint>
where
    R: TryRngCore + ?Sized,
{
    sample(field, rng, false)
}

/// A uniformly random element of [1, p).
pub fn uniform_nonzero_element<R>(field: &Field, rng: &mut R) -> ShamirResult<BigUint>
where
    R: TryRngCore + ?Sized,
{
    sample(field, rng, true)
}

fn sample<R>(field: &Field, rng: &mut R, nonzero: bool) -> ShamirResult<BigUint>
where
    R: TryRngCore + ?Sized,
{
    let modulus = field.modulus();
    let bits = modulus.bits() as usize;
    let byte_len = bits.div_ceil(8);
    let mask = 0xffu8 >> (byte_len * 8 - bits);

    let mut buf = Zeroizing::new(vec![0u8; byte_len]);
    for _ in 0..MAX_DRAWS {
        rng.try_fill_bytes(buf.as_mut_slice())
            .map_err(|err| ShamirError::RandomSourceFailure(err.to_string()))?;
        buf[0] &= mask;

        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate >= modulus || (nonzero && candidate.is_zero()) {
            continue;
        }
        return Ok(candidate);
    }

    Err(ShamirError::RandomSourceFailure(format!(
        "no usable candidate after {MAX_DRAWS} draws"
    )))
}
