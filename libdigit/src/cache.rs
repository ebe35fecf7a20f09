//! Block cache contract consumed by the digit service.

use async_trait::async_trait;
use moka::future::Cache;

/// Key/value store for computed digit blocks, keyed by the decimal block
/// offset.
///
/// A miss is `Ok(None)`, never an error. Implementations own their own
/// timeout and deadline behavior; the service propagates failures unchanged.
#[async_trait]
pub trait DigitCache: Send + Sync {
    async fn get_value(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set_value(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Default cache: every read misses and writes are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

#[async_trait]
impl DigitCache for NoopCache {
    async fn get_value(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    async fn set_value(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

/// In-process cache for single-instance deployments and tests.
pub struct MemoryCache {
    blocks: Cache<String, String>,
}

impl MemoryCache {
    pub fn new(capacity: u64) -> MemoryCache {
        MemoryCache {
            blocks: Cache::new(capacity),
        }
    }
}

#[async_trait]
impl DigitCache for MemoryCache {
    async fn get_value(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.blocks.get(key).await)
    }

    async fn set_value(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.blocks.insert(key.to_owned(), value.to_owned()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_roundtrip() {
        let cache = MemoryCache::new(16);
        assert_eq!(cache.get_value("0").await.unwrap(), None);
        cache.set_value("0", "141592653").await.unwrap();
        assert_eq!(
            cache.get_value("0").await.unwrap().as_deref(),
            Some("141592653")
        );
    }

    #[tokio::test]
    async fn test_noop_always_misses() {
        let cache = NoopCache;
        cache.set_value("0", "141592653").await.unwrap();
        assert_eq!(cache.get_value("0").await.unwrap(), None);
    }
}
