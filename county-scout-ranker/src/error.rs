//! Error types for ranking requests.

use thiserror::Error;

/// Errors raised while validating a ranking request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// The budget was negative, zero, or not a finite number.
    #[error("budget must be a positive, finite amount, got {budget}")]
    InvalidBudget {
        /// Rejected budget.
        budget: f64,
    },
    /// The result limit was zero.
    #[error("result limit must be at least 1")]
    InvalidResultLimit,
}
