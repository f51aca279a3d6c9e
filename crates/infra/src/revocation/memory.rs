//! In-memory revocation store for tests and single-process development.
//!
//! Honors the same contract as the Redis store, including TTL eviction.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RevocationError, RevocationStore};

#[derive(Debug, Clone, Copy)]
struct Entry {
    live: bool,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct InMemoryRevocationStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn register(&self, token: &str, ttl: Duration) -> Result<(), RevocationError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            token.to_string(),
            Entry {
                live: true,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn is_live(&self, token: &str) -> Result<bool, RevocationError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(token)
            .is_some_and(|entry| entry.live && entry.expires_at > Instant::now()))
    }

    async fn revoke(&self, token: &str) -> Result<(), RevocationError> {
        let mut entries = self.entries.write().await;
        entries.remove(token);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RevocationError> {
        Ok(())
    }
}
