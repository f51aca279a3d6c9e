//! Token-revocation registry.
//!
//! Access tokens are registered here at issuance (key = the raw token
//! string, value = a liveness flag, TTL = remaining token lifetime) and
//! deleted at logout. The guard consults this store on every request, and
//! its answer is authoritative over signature validity: a cryptographically
//! valid token whose key is gone is a dead token.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod redis;

/// Store transport failure. Absent keys are never an error — they simply
/// answer "not live".
#[derive(Debug, Error)]
pub enum RevocationError {
    #[error("revocation store unavailable: {0}")]
    Transport(String),
}

#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Register a live token. `ttl` mirrors the token's remaining lifetime
    /// so the store evicts no earlier than the token expires.
    async fn register(&self, token: &str, ttl: Duration) -> Result<(), RevocationError>;

    /// Whether the token is present and its flag is truthy. Absent keys
    /// return `Ok(false)`.
    async fn is_live(&self, token: &str) -> Result<bool, RevocationError>;

    /// Delete a token. Deleting an absent key is a no-op, which makes
    /// logout idempotent.
    async fn revoke(&self, token: &str) -> Result<(), RevocationError>;

    /// Liveness of the store itself (health endpoint).
    async fn ping(&self) -> Result<(), RevocationError>;
}
