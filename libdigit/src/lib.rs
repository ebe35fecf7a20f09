//! Digit service: maps an arbitrary digit index of pi to a cached or freshly
//! computed nine-digit block and extracts the single requested digit.

pub mod cache;
pub mod config;
pub mod error;
pub mod service;

pub use cache::{DigitCache, MemoryCache, NoopCache};
pub use config::{CacheKind, PrimeSourceKind, ServiceConfig};
pub use error::DigitError;
pub use service::{DigitLookup, DigitService, DigitServiceBuilder};
