use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{ArithmeticError, Result};

/// Prime-order field ℤ_p over an arbitrary-precision modulus.
///
/// Every arithmetic result is the canonical representative in [0, p).
/// The modulus is trusted to be prime; that is the caller's contract and
/// is not verified here. A modulus below 2 is rejected outright, and a
/// composite modulus can still surface later as a failed inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    modulus: BigUint,
}

impl Field {
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(ArithmeticError::DegenerateModulus(modulus));
        }
        Ok(Self { modulus })
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Canonical representative of `value` in [0, p).
    #[inline]
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// `a - b mod p`, lifting `a` by the modulus so the difference never
    /// goes negative in unsigned arithmetic.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        (a + &self.modulus - b) % &self.modulus
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// Additive inverse, `-a mod p`.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    /// `base^exponent mod p`.
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// Multiplicative inverse via Fermat's little theorem: `v^(p-2) mod p`.
    ///
    /// The candidate is verified by multiplication, so a composite modulus
    /// cannot smuggle a wrong inverse through; verification failure and
    /// inversion of zero both report a zero denominator.
    pub fn inverse(&self, value: &BigUint) -> Result<BigUint> {
        let value = self.reduce(value);
        if value.is_zero() {
            return Err(ArithmeticError::ZeroDenominator(value));
        }

        let exponent = &self.modulus - BigUint::from(2u32);
        let candidate = self.pow(&value, &exponent);
        if self.mul(&candidate, &value).is_one() {
            Ok(candidate)
        } else {
            Err(ArithmeticError::ZeroDenominator(value))
        }
    }
}
