//! Cross-cutting error types for the civic crates.
//!
//! Storage errors (`SlotError`, `StoreError`) live in `civic-store` and
//! configuration errors in `civic-config`. The binary converges all of them
//! into `anyhow`.

use thiserror::Error;

/// Errors that can be raised while interpreting civic domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A label did not match any known variant of an enumerated field.
    #[error("Unknown {field} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}
