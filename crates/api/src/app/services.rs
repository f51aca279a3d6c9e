//! Service wiring and the two-phase session issuer.
//!
//! `AppServices` owns the injected collaborators (token codec, revocation
//! store, identity repository) and implements both issuance paths plus
//! logout. Both paths converge on [`AppServices::issue_access_token`], so
//! every access token has one shape and the guard has one decoding path.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

use warden_auth::{AccessTokenClaims, TemporaryTokenClaims, TokenCodec, TokenGrant};
use warden_infra::{verify_password, IdentityRepository, RevocationStore, UserRecord};

use crate::middleware::AuthState;

/// Session-issuer failures, pre-mapped by the routes onto the response
/// taxonomy.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Unknown identifier and wrong password collapse into one variant;
    /// callers cannot tell the two apart.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Temporary token failed verification, parsing, or expiry.
    #[error("invalid or expired temporary token")]
    InvalidTemporaryToken,

    /// The temporary token verified but its subject no longer resolves.
    /// Mapped to `Unauthorized`, never 404 — a redemption attempt must not
    /// confirm whether an account exists.
    #[error("identity not found")]
    IdentityNotFound,

    #[error("{0}")]
    Internal(String),
}

pub struct AppServices {
    pub codec: TokenCodec,
    pub revocation: Arc<dyn RevocationStore>,
    pub identity: Arc<dyn IdentityRepository>,
}

impl AppServices {
    pub fn new(
        codec: TokenCodec,
        revocation: Arc<dyn RevocationStore>,
        identity: Arc<dyn IdentityRepository>,
    ) -> Self {
        Self {
            codec,
            revocation,
            identity,
        }
    }

    /// Handles shared with the request guards.
    pub fn auth_state(&self) -> AuthState {
        AuthState {
            codec: self.codec.clone(),
            revocation: self.revocation.clone(),
        }
    }

    /// Phase 1: credentials → short-lived temporary token.
    ///
    /// Carries identity only (no permissions) and never touches the
    /// revocation store.
    pub async fn validate_credentials(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<String, SessionError> {
        let user = self.authenticate(identifier, password).await?;

        let claims = TemporaryTokenClaims::new(
            user.id,
            user.role_id,
            user.role_code.clone(),
            Utc::now(),
        );
        self.codec
            .sign_temporary(&claims)
            .map_err(|e| SessionError::Internal(e.to_string()))
    }

    /// Phase 2: temporary token → registered access token.
    ///
    /// The identity and grant list are re-read here, so role changes between
    /// phase 1 and phase 2 are picked up. Temporary tokens are not tracked
    /// server-side: redemption is repeatable within the 5-minute window, and
    /// each redemption mints an independently valid access token.
    pub async fn redeem_temporary_token(&self, temporary: &str) -> Result<String, SessionError> {
        let wire = self
            .codec
            .verify(temporary)
            .map_err(|_| SessionError::InvalidTemporaryToken)?;
        let claims = TemporaryTokenClaims::from_wire(&wire)
            .map_err(|_| SessionError::InvalidTemporaryToken)?;
        if claims.is_expired(Utc::now()) {
            return Err(SessionError::InvalidTemporaryToken);
        }

        let user = self
            .identity
            .find_by_id(claims.user_id)
            .await
            .map_err(|e| SessionError::Internal(e.to_string()))?
            .ok_or(SessionError::IdentityNotFound)?;

        self.issue_access_token(&user).await
    }

    /// Direct login: credentials straight to a registered access token,
    /// skipping the temporary-token phase.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<String, SessionError> {
        let user = self.authenticate(identifier, password).await?;
        self.issue_access_token(&user).await
    }

    /// Logout: delete the raw token from the revocation store. Idempotent —
    /// deleting an absent key is not an error.
    pub async fn logout(&self, token: &str) -> Result<(), SessionError> {
        self.revocation
            .revoke(token)
            .await
            .map_err(|e| SessionError::Internal(e.to_string()))
    }

    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<UserRecord, SessionError> {
        let user = self
            .identity
            .find_by_identifier(identifier)
            .await
            .map_err(|e| SessionError::Internal(e.to_string()))?
            .ok_or(SessionError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(SessionError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Mint an access token embedding the user's current grant snapshot and
    /// register it in the revocation store with a TTL mirroring its
    /// lifetime.
    async fn issue_access_token(&self, user: &UserRecord) -> Result<String, SessionError> {
        let now = Utc::now();

        let grants: Vec<TokenGrant> = user
            .grants
            .iter()
            .map(|g| TokenGrant::new(g.group.clone(), g.action.clone(), g.access_scope))
            .collect();

        let claims = AccessTokenClaims::new(
            user.id,
            user.role_id,
            user.role_name.clone(),
            user.role_code.clone(),
            grants,
            now,
        );

        let token = self
            .codec
            .sign_access(&claims)
            .map_err(|e| SessionError::Internal(e.to_string()))?;

        self.revocation
            .register(&token, Duration::from_secs(claims.ttl_from(now)))
            .await
            .map_err(|e| SessionError::Internal(e.to_string()))?;

        Ok(token)
    }
}
