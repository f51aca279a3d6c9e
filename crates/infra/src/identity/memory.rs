//! In-memory identity repository for tests and single-process development.

use async_trait::async_trait;
use tokio::sync::RwLock;

use warden_core::UserId;

use super::{IdentityError, IdentityRepository, UserRecord, UserSummary};

#[derive(Debug, Default)]
pub struct InMemoryIdentityRepository {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user: UserRecord) {
        self.users.write().await.push(user);
    }

    /// Replace a user in place (tests use this to change roles/grants
    /// between issuance phases).
    pub async fn replace(&self, user: UserRecord) {
        let mut users = self.users.write().await;
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user;
        } else {
            users.push(user);
        }
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserRecord>, IdentityError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.username == identifier || u.email == identifier)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, IdentityError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<UserSummary>, IdentityError> {
        let users = self.users.read().await;
        Ok(users.iter().map(UserSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::{AccessScope, PermissionId, RoleId};

    use crate::identity::GrantRecord;

    fn sample_user() -> UserRecord {
        UserRecord {
            id: UserId::new(1),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$12$notarealhash".to_string(),
            role_id: RoleId::new(2),
            role_name: "Operator".to_string(),
            role_code: "operator".to_string(),
            grants: vec![GrantRecord {
                permission_id: PermissionId::new(10),
                group: "user".to_string(),
                action: "read".to_string(),
                access_scope: AccessScope::Own,
            }],
            created_by: UserId::new(1),
        }
    }

    #[tokio::test]
    async fn finds_by_username_or_email() {
        let repo = InMemoryIdentityRepository::new();
        repo.insert(sample_user()).await;

        assert!(repo.find_by_identifier("alice").await.unwrap().is_some());
        assert!(repo
            .find_by_identifier("alice@example.com")
            .await
            .unwrap()
            .is_some());
        assert!(repo.find_by_identifier("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replace_swaps_role_data() {
        let repo = InMemoryIdentityRepository::new();
        repo.insert(sample_user()).await;

        let mut changed = sample_user();
        changed.role_code = "admin".to_string();
        repo.replace(changed).await;

        let found = repo.find_by_id(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(found.role_code, "admin");
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
