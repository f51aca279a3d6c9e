//! Postgres-backed identity repository.
//!
//! Two runtime queries per lookup: the user joined to its role, then the
//! role's grants joined to their permissions. `ORDER BY rp.id` fixes the
//! grant order that gets embedded into tokens.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use warden_core::{PermissionId, RoleId, UserId};

use super::{GrantRecord, IdentityError, IdentityRepository, UserRecord, UserSummary};

const USER_BY_IDENTIFIER: &str = "\
SELECT u.id, u.username, u.email, u.password_hash, u.created_by, \
       r.id AS role_id, r.name AS role_name, r.code AS role_code \
FROM users u \
JOIN roles r ON r.id = u.role_id \
WHERE u.username = $1 OR u.email = $1";

const USER_BY_ID: &str = "\
SELECT u.id, u.username, u.email, u.password_hash, u.created_by, \
       r.id AS role_id, r.name AS role_name, r.code AS role_code \
FROM users u \
JOIN roles r ON r.id = u.role_id \
WHERE u.id = $1";

const GRANTS_BY_ROLE: &str = "\
SELECT rp.permission_id, p.group_menu, p.action, rp.access_scope \
FROM role_permissions rp \
JOIN permissions p ON p.id = rp.permission_id \
WHERE rp.role_id = $1 \
ORDER BY rp.id";

const LIST_USERS: &str = "\
SELECT u.id, u.username, u.email, u.created_by, r.name AS role_name \
FROM users u \
JOIN roles r ON r.id = u.role_id \
ORDER BY u.id";

#[derive(Clone)]
pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn hydrate(&self, row: PgRow) -> Result<UserRecord, IdentityError> {
        let role_id: i64 = row.try_get("role_id").map_err(transport)?;

        let grant_rows = sqlx::query(GRANTS_BY_ROLE)
            .bind(role_id)
            .fetch_all(&self.pool)
            .await
            .map_err(transport)?;

        let mut grants = Vec::with_capacity(grant_rows.len());
        for grant in grant_rows {
            let scope: String = grant.try_get("access_scope").map_err(transport)?;
            grants.push(GrantRecord {
                permission_id: PermissionId::new(
                    grant.try_get::<i64, _>("permission_id").map_err(transport)?,
                ),
                group: grant.try_get("group_menu").map_err(transport)?,
                action: grant.try_get("action").map_err(transport)?,
                access_scope: scope
                    .parse()
                    .map_err(|e| IdentityError::Data(format!("access_scope: {e}")))?,
            });
        }

        Ok(UserRecord {
            id: UserId::new(row.try_get::<i64, _>("id").map_err(transport)?),
            username: row.try_get("username").map_err(transport)?,
            email: row.try_get("email").map_err(transport)?,
            password_hash: row.try_get("password_hash").map_err(transport)?,
            role_id: RoleId::new(role_id),
            role_name: row.try_get("role_name").map_err(transport)?,
            role_code: row.try_get("role_code").map_err(transport)?,
            grants,
            created_by: UserId::new(row.try_get::<i64, _>("created_by").map_err(transport)?),
        })
    }
}

fn transport(err: sqlx::Error) -> IdentityError {
    IdentityError::Transport(err.to_string())
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepository {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserRecord>, IdentityError> {
        let row = sqlx::query(USER_BY_IDENTIFIER)
            .bind(identifier)
            .fetch_optional(&self.pool)
            .await
            .map_err(transport)?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, IdentityError> {
        let row = sqlx::query(USER_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(transport)?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<UserSummary>, IdentityError> {
        let rows = sqlx::query(LIST_USERS)
            .fetch_all(&self.pool)
            .await
            .map_err(transport)?;

        rows.into_iter()
            .map(|row| {
                Ok(UserSummary {
                    id: UserId::new(row.try_get::<i64, _>("id").map_err(transport)?),
                    username: row.try_get("username").map_err(transport)?,
                    email: row.try_get("email").map_err(transport)?,
                    role_name: row.try_get("role_name").map_err(transport)?,
                    created_by: UserId::new(
                        row.try_get::<i64, _>("created_by").map_err(transport)?,
                    ),
                })
            })
            .collect()
    }
}
