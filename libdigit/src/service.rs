//! Orchestration: index to block offset, cache lookup, compute on miss,
//! extract the single requested digit.

use std::sync::Arc;

use libspigot::{
    BLOCK_WIDTH, DigitBlock, PrimeSource, SpigotCalculator, TrialDivision, block_offset,
};
use log::{debug, warn};

use crate::cache::{DigitCache, NoopCache};
use crate::error::DigitError;

// Keys are the decimal block offset; a single stable encoding, never mixed.
fn cache_key(offset: u64) -> String {
    offset.to_string()
}

/// One resolved digit plus whether its block came from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitLookup {
    pub digit: u8,
    pub cache_hit: bool,
}

/// Maps an arbitrary digit index to a cached or freshly computed block.
///
/// Holds no mutable state of its own; clones share the calculator and the
/// injected cache and may be used concurrently. Concurrent misses on the same
/// block may compute it twice; the computation is idempotent, so the only
/// cost is the duplicated work.
#[derive(Clone)]
pub struct DigitService {
    calculator: Arc<SpigotCalculator>,
    cache: Arc<dyn DigitCache>,
}

impl DigitService {
    pub fn builder() -> DigitServiceBuilder {
        DigitServiceBuilder::default()
    }

    /// Returns the `index`-th fractional decimal digit of pi (zero-based).
    pub async fn get_digit(&self, index: u64) -> Result<DigitLookup, DigitError> {
        if index > i64::MAX as u64 {
            return Err(DigitError::IndexOutOfRange(index));
        }

        let offset = block_offset(index);
        let key = cache_key(offset);
        let pos = (index % BLOCK_WIDTH as u64) as usize;

        if let Some(block) = self.lookup(&key).await? {
            return Ok(DigitLookup {
                digit: block.digit(pos),
                cache_hit: true,
            });
        }

        debug!("cache miss for block {offset}, computing");
        let calculator = self.calculator.clone();
        let block = tokio::task::spawn_blocking(move || calculator.compute(offset)).await??;
        self.cache
            .set_value(&key, block.as_str())
            .await
            .map_err(DigitError::Cache)?;

        Ok(DigitLookup {
            digit: block.digit(pos),
            cache_hit: false,
        })
    }

    async fn lookup(&self, key: &str) -> Result<Option<DigitBlock>, DigitError> {
        let cached = self.cache.get_value(key).await.map_err(DigitError::Cache)?;
        match cached.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => match text.parse() {
                Ok(block) => Ok(Some(block)),
                Err(_) => {
                    // a corrupt entry is treated as a miss and overwritten
                    warn!("discarding malformed cached block for key {key}: {text:?}");
                    Ok(None)
                }
            },
        }
    }
}

#[derive(Default)]
pub struct DigitServiceBuilder {
    cache: Option<Arc<dyn DigitCache>>,
    primes: Option<Arc<dyn PrimeSource>>,
}

impl DigitServiceBuilder {
    pub fn cache(mut self, cache: Arc<dyn DigitCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn prime_source(mut self, primes: Arc<dyn PrimeSource>) -> Self {
        self.primes = Some(primes);
        self
    }

    pub fn build(self) -> DigitService {
        let primes = self.primes.unwrap_or_else(|| Arc::new(TrialDivision));
        DigitService {
            calculator: Arc::new(SpigotCalculator::new(primes)),
            cache: self.cache.unwrap_or_else(|| Arc::new(NoopCache)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_decimal() {
        assert_eq!(cache_key(0), "0");
        assert_eq!(cache_key(1_000_000_035), "1000000035");
    }

    #[tokio::test]
    async fn test_out_of_range_rejected() {
        let service = DigitService::builder().build();
        let err = service.get_digit(i64::MAX as u64 + 1).await.unwrap_err();
        assert!(matches!(err, DigitError::IndexOutOfRange(_)));
    }
}
