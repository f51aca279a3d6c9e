//! `warden-infra` — I/O adapters behind the auth subsystem's trait seams.
//!
//! Two external collaborators live here: the token-revocation store (Redis
//! in production, in-memory for tests/dev) and the identity/credential
//! repository (Postgres in production, in-memory for tests/dev). Both are
//! constructed once at startup and injected; nothing reads ambient globals.

pub mod identity;
pub mod password;
pub mod revocation;

pub use identity::{
    memory::InMemoryIdentityRepository, postgres::PostgresIdentityRepository, GrantRecord,
    IdentityError, IdentityRepository, UserRecord, UserSummary,
};
pub use password::{hash_password, verify_password, PasswordError};
pub use revocation::{
    memory::InMemoryRevocationStore, redis::RedisRevocationStore, RevocationError,
    RevocationStore,
};
