use thiserror::Error;

use math::ArithmeticError;

/// Result type specialized for sharing operations.
pub type ShamirResult<T> = std::result::Result<T, ShamirError>;

/// Errors that can arise while splitting or reconstructing a secret.
///
/// Each operation is atomic: it fully succeeds or returns one of these
/// and no output.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ShamirError {
    #[error(
        "invalid configuration: threshold {threshold} exceeds share count {share_count}"
    )]
    ThresholdExceedsShareCount {
        threshold: usize,
        share_count: usize,
    },
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),
    #[error("insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
