use thiserror::Error;

/// Arithmetic failure inside a formula whose inputs were all provided.
///
/// These never escape the solver; they are reported through the solution
/// text with [`Status::ComputationFailed`](super::Status::ComputationFailed).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ComputeError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of negative value {0}")]
    NegativeRadicand(f64),

    #[error("result is not a finite number")]
    NonFinite,
}
