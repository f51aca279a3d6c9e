//! Redis-backed revocation store.
//!
//! Single-key `SET ... EX` / `GET` / `DEL` per call; each check is
//! independently atomic at the store level. The connection manager handles
//! reconnects and is cheap to clone per request.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use super::{RevocationError, RevocationStore};

/// The flag value stored for live tokens. `"1"` is accepted on read as well,
/// for registries written by older tooling.
const LIVE_FLAG: &str = "true";

#[derive(Clone)]
pub struct RedisRevocationStore {
    conn: ConnectionManager,
}

impl RedisRevocationStore {
    pub async fn connect(url: impl AsRef<str>) -> Result<Self, RevocationError> {
        let client = redis::Client::open(url.as_ref())
            .map_err(|e| RevocationError::Transport(e.to_string()))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| RevocationError::Transport(e.to_string()))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn register(&self, token: &str, ttl: Duration) -> Result<(), RevocationError> {
        let mut conn = self.conn.clone();
        // Redis TTLs are whole seconds; round up so the entry never expires
        // before the token does.
        let secs = ttl.as_secs().max(1);
        let _: () = conn
            .set_ex(token, LIVE_FLAG, secs)
            .await
            .map_err(|e| RevocationError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn is_live(&self, token: &str) -> Result<bool, RevocationError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn
            .get(token)
            .await
            .map_err(|e| RevocationError::Transport(e.to_string()))?;

        Ok(matches!(value.as_deref(), Some("true") | Some("1")))
    }

    async fn revoke(&self, token: &str) -> Result<(), RevocationError> {
        let mut conn = self.conn.clone();
        let _: i64 = conn
            .del(token)
            .await
            .map_err(|e| RevocationError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), RevocationError> {
        let mut conn = self.conn.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|e| RevocationError::Transport(e.to_string()))?;
        Ok(())
    }
}
