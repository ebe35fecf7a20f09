//! Digit extraction for pi: any fractional decimal digit by index, computed
//! without knowing the digits before it.

pub mod modmath;
pub mod primes;
pub mod spigot;

mod error;

pub use error::SpigotError;
pub use primes::{BailliePsw, PrimeSource, TrialDivision};
pub use spigot::{BLOCK_WIDTH, DigitBlock, SpigotCalculator, block_offset};
