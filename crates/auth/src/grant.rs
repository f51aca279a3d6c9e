use serde::{Deserialize, Serialize};

use warden_core::AccessScope;

/// Permission grant as embedded in an access token.
///
/// This is the snapshot form: `{group, action, access_scope}` triples copied
/// out of the role's grant list at issuance time. Tokens are authoritative
/// for their own grants; the guard never re-reads the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    /// Menu group the permission belongs to (e.g. `"user"`).
    pub group: String,
    /// CRUD action within the group (e.g. `"read"`).
    pub action: String,
    /// Authorization breadth granted for this capability.
    pub access_scope: AccessScope,
}

impl TokenGrant {
    pub fn new(
        group: impl Into<String>,
        action: impl Into<String>,
        access_scope: AccessScope,
    ) -> Self {
        Self {
            group: group.into(),
            action: action.into(),
            access_scope,
        }
    }
}
