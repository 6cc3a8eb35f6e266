use num_bigint::BigUint;
use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = ArithmeticError> = core::result::Result<T, E>;

/// Errors raised by field arithmetic.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ArithmeticError {
    #[error("zero denominator: {0} has no inverse modulo the field modulus")]
    ZeroDenominator(BigUint),
    #[error("degenerate modulus {0}: a field needs a modulus of at least 2")]
    DegenerateModulus(BigUint),
}
