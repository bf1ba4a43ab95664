//! Cross-cutting error types for the garden crates.
//!
//! Domain-specific errors (`ConfigError`, `ImpactError`) live in their
//! respective crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any garden crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A leaf sub-score fell outside the 1-5 scale.
    #[error("Rating out of range: {value} (expected 1..=5)")]
    RatingOutOfRange { value: i64 },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
