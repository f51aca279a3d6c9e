use warden_auth::TokenIdentity;
use warden_core::{AccessScope, RoleId, UserId};

/// Authorization context for a request.
///
/// Built exactly once by the guard after a token has passed every gate, then
/// attached as a request extension. Immutable — downstream row-scoping logic
/// reads it, nothing writes it. Discarded with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    user_id: UserId,
    role_id: RoleId,
    role_name: String,
    role_code: String,
    is_admin: bool,
    scope: Option<AccessScope>,
}

impl AuthContext {
    pub fn new(identity: &TokenIdentity, is_admin: bool, scope: Option<AccessScope>) -> Self {
        Self {
            user_id: identity.user_id,
            role_id: identity.role_id,
            role_name: identity.role_name.clone(),
            role_code: identity.role_code.clone(),
            is_admin,
            scope,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role_id(&self) -> RoleId {
        self.role_id
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    pub fn role_code(&self) -> &str {
        &self.role_code
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Resolved access scope for the guarded capability. `None` for
    /// administrative callers (unrestricted) and on web routes (no scope
    /// evaluation).
    pub fn scope(&self) -> Option<AccessScope> {
        self.scope
    }
}
