//! Sharing polynomial over a prime field.
//!
//! A polynomial is an ordered sequence of canonical field elements; the
//! constant term is the secret being shared. Polynomials exist only while
//! shares are produced and are never persisted or transmitted whole.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::field::Field;

/// Coefficients `[c0, c1, .., c(k-1)]` of a degree `k - 1` polynomial,
/// each reduced into [0, p) at construction.
///
/// `Debug` redacts the coefficients and the values are cleared on drop.
/// `BigUint` does not expose its limb buffer, so clearing replaces each
/// value with zero and releases the allocations rather than scrubbing
/// them in place.
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<BigUint>, field: &Field) -> Self {
        let coefficients = coefficients
            .iter()
            .map(|coefficient| field.reduce(coefficient))
            .collect();
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// The constant term, `None` for the empty polynomial.
    pub fn secret(&self) -> Option<&BigUint> {
        self.coefficients.first()
    }

    /// Number of coefficients, which is the threshold k of the scheme the
    /// polynomial was generated for.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluate at `x` by Horner's method, reducing after every step so
    /// intermediate values never grow past the modulus.
    pub fn evaluate(&self, x: &BigUint, field: &Field) -> BigUint {
        let mut acc = BigUint::zero();
        for coefficient in self.coefficients.iter().rev() {
            acc = field.add(&field.mul(&acc, x), coefficient);
        }
        acc
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("threshold", &self.coefficients.len())
            .field("coefficients", &"***SENSITIVE***")
            .finish()
    }
}

impl Zeroize for Polynomial {
    fn zeroize(&mut self) {
        for coefficient in self.coefficients.iter_mut() {
            *coefficient = BigUint::zero();
        }
        self.coefficients.clear();
    }
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Polynomial {}
