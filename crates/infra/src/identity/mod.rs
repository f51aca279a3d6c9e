//! Identity/credential repository.
//!
//! One read returns the user together with their role and the role's full
//! grant list, in the order the store yields grants — that order is what
//! ends up embedded in access tokens, and the scope evaluator's first-match
//! rule depends on it. The session issuer reads this repository at phase-2
//! redemption and at direct login; the per-request guard never does.

use async_trait::async_trait;
use thiserror::Error;

use warden_core::{AccessScope, PermissionId, RoleId, UserId};

pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity store unavailable: {0}")]
    Transport(String),

    /// A stored value could not be mapped to its domain type.
    #[error("invalid stored data: {0}")]
    Data(String),
}

/// A role's grant of one permission, with its scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantRecord {
    pub permission_id: PermissionId,
    pub group: String,
    pub action: String,
    pub access_scope: AccessScope,
}

/// A user with role and grants preloaded.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Salted one-way hash; never the plaintext secret.
    pub password_hash: String,
    pub role_id: RoleId,
    pub role_name: String,
    pub role_code: String,
    /// Grant list in store order (duplicates tolerated; first match wins
    /// downstream).
    pub grants: Vec<GrantRecord>,
    pub created_by: UserId,
}

/// Listing row for the dashboard user table (no credentials, no grants).
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role_name: String,
    pub created_by: UserId,
}

impl From<&UserRecord> for UserSummary {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role_name: user.role_name.clone(),
            created_by: user.created_by,
        }
    }
}

#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Look up a user by username OR email (one parameter serves both).
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserRecord>, IdentityError>;

    /// Look up a user by id. Used at phase-2 redemption so role changes
    /// between phases are picked up.
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, IdentityError>;

    /// All users, for the scope-filtered dashboard listing.
    async fn list(&self) -> Result<Vec<UserSummary>, IdentityError>;
}
