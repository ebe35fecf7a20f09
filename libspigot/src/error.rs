use thiserror::Error;

/// Failures inside the digit-extraction engine. These signal a broken
/// algorithmic invariant, not a condition callers can recover from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpigotError {
    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: i64, modulus: i64 },

    #[error("invariant violated: {0}")]
    Invariant(String),
}
