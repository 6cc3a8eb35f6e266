//! Threshold secret sharing over a prime field.
//!
//! A secret is encoded as the constant term of a random polynomial of
//! degree k - 1. Shares are evaluations of that polynomial at distinct
//! nonzero points, and any k of them recover the secret by Lagrange
//! interpolation at x = 0; fewer than k reveal nothing about it.
//!
//! The protocol is two-phase and stateless: GENERATE (coefficients to
//! shares) and RECONSTRUCT (shares to secret). Either phase can run any
//! number of times, and randomness is always an explicit parameter so
//! tests can seed it.
//!
//! ```
//! use math::Field;
//! use num_bigint::BigUint;
//! use rand::rngs::OsRng;
//! use shamir::{
//!     generate_coefficients, generate_shares, reconstruct,
//!     select_abscissas, AbscissaMode,
//! };
//!
//! // 2^61 - 1, a Mersenne prime
//! let field = Field::new(BigUint::from(2_305_843_009_213_693_951u64)).unwrap();
//! let mut rng = OsRng;
//!
//! let polynomial = generate_coefficients(3, &field, &mut rng).unwrap();
//! let abscissas =
//!     select_abscissas(5, &field, AbscissaMode::Sequential, &mut rng).unwrap();
//! let shares = generate_shares(&polynomial, &abscissas, &field).unwrap();
//!
//! let secret = reconstruct(&shares[..3], &field).unwrap();
//! assert_eq!(Some(&secret), polynomial.secret());
//! ```

pub mod abscissa;
pub mod coefficients;
pub mod error;
pub mod reconstruct;
pub mod sampling;
pub mod share;
pub mod split;

pub use abscissa::{select_abscissas, AbscissaMode};
pub use coefficients::{generate_coefficients, polynomial_for_secret};
pub use error::{ShamirError, ShamirResult};
pub use reconstruct::{reconstruct, reconstruct_with_threshold};
pub use share::Share;
pub use split::generate_shares;
