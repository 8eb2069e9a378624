//! Client-side input validation errors.

use thiserror::Error;

/// Rejected user input. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Order amount is not a positive integer.
    #[error("Enter an amount greater than zero.")]
    InvalidAmount,

    /// Pack size is not a positive integer.
    #[error("Pack size must be a positive whole number.")]
    InvalidPackSize,

    /// Pack id is not a positive integer.
    #[error("Invalid pack identifier.")]
    InvalidPackId,
}
