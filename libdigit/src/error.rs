use libspigot::SpigotError;
use thiserror::Error;

/// Failures surfaced by [`DigitService`](crate::DigitService). A digit is
/// never returned alongside an error.
#[derive(Error, Debug)]
pub enum DigitError {
    /// The requested index cannot be represented as a non-negative signed
    /// 64-bit value, which the engine's arithmetic requires.
    #[error("digit index {0} exceeds the signed 64-bit range")]
    IndexOutOfRange(u64),

    /// The injected cache failed on read or write; propagated unchanged,
    /// never retried.
    #[error("cache error: {0}")]
    Cache(#[source] anyhow::Error),

    /// The engine detected a broken algorithmic invariant.
    #[error("digit computation failed: {0}")]
    Compute(#[from] SpigotError),

    /// The blocking computation task died before producing a block.
    #[error("digit computation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
