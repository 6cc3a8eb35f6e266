pub mod error;
pub mod field;
pub mod poly;

pub use error::{ArithmeticError, Result};
pub use field::Field;
pub use poly::Polynomial;
