use std::sync::Arc;

use libspigot::{BailliePsw, PrimeSource, TrialDivision};
use serde::{Deserialize, Serialize};

use crate::cache::{DigitCache, MemoryCache, NoopCache};
use crate::service::DigitService;

/// Prime iteration strategy selector.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimeSourceKind {
    #[default]
    #[serde(rename = "trial-division")]
    TrialDivision,
    #[serde(rename = "baillie-psw")]
    BailliePsw,
}

/// Cache backend selector. Anything beyond in-process memory is supplied by
/// the embedding application through the service builder.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheKind {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "memory")]
    Memory,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    #[serde(rename = "primeSource", default)]
    pub prime_source: PrimeSourceKind,

    #[serde(rename = "cache", default)]
    pub cache: CacheKind,

    #[serde(rename = "cacheCapacity", default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

fn default_cache_capacity() -> u64 {
    65_536
}

impl Default for ServiceConfig {
    fn default() -> ServiceConfig {
        ServiceConfig {
            prime_source: PrimeSourceKind::default(),
            cache: CacheKind::default(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl ServiceConfig {
    pub fn build(&self) -> DigitService {
        let primes: Arc<dyn PrimeSource> = match self.prime_source {
            PrimeSourceKind::TrialDivision => Arc::new(TrialDivision),
            PrimeSourceKind::BailliePsw => Arc::new(BailliePsw),
        };
        let cache: Arc<dyn DigitCache> = match self.cache {
            CacheKind::None => Arc::new(NoopCache),
            CacheKind::Memory => Arc::new(MemoryCache::new(self.cache_capacity)),
        };
        DigitService::builder()
            .prime_source(primes)
            .cache(cache)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let str = r#"{
  "primeSource": "baillie-psw",
  "cache": "memory",
  "cacheCapacity": 1024
}"#;
        let config: ServiceConfig = serde_json::from_str(str).unwrap();
        assert_eq!(config.prime_source, PrimeSourceKind::BailliePsw);
        assert_eq!(config.cache, CacheKind::Memory);
        assert_eq!(config.cache_capacity, 1024);
    }

    #[test]
    fn test_defaults() {
        let config: ServiceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.prime_source, PrimeSourceKind::TrialDivision);
        assert_eq!(config.cache, CacheKind::None);
        assert_eq!(config.cache_capacity, 65_536);
    }
}
