//! Secret share definition.
//!
//! A share is a point (x, y) on the sharing polynomial. The x-coordinate
//! identifies the holder and is not sensitive; the y-coordinate is, so
//! `Debug` redacts it. Shares are independent immutable values with no
//! tie to the polynomial that produced them.

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// One share of a split secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// The x-coordinate. Nonzero and unique within a sharing session.
    pub x: BigUint,
    /// The y-coordinate, `polynomial(x) mod p`.
    pub y: BigUint,
}

impl Share {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x)
            .field("y", &"***SENSITIVE***")
            .finish()
    }
}
