//! Per-request authorization guards.
//!
//! Two variants share the same front half (header, signature, revocation,
//! expiry, identity):
//!
//! - the **dashboard guard** carries a required capability baked in at route
//!   registration, grants administrative role codes a full bypass, and
//!   otherwise evaluates the capability against the grants embedded in the
//!   token (never a fresh database read);
//! - the **web guard** stops after identity population — any validly-signed,
//!   live, unexpired token authorizes the request.
//!
//! A rejected request is answered here; the inner handler never runs.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use warden_auth::{
    evaluate_scope, grants_from_wire, is_admin_code, GrantParseError, TokenCodec, TokenError,
    TokenIdentity, WireClaims,
};
use warden_infra::RevocationStore;

use crate::app::errors::AuthError;
use crate::context::AuthContext;

pub const MSG_MISSING_HEADER: &str = "Missing Authorization header";
pub const MSG_INVALID_OR_EXPIRED: &str = "Invalid or expired token";
pub const MSG_INVALID_TOKEN: &str = "Invalid token";
pub const MSG_TOKEN_NOT_LIVE: &str = "Token is not valid";
pub const MSG_EXPIRED: &str = "Token has expired";
pub const MSG_FORBIDDEN: &str = "You do not have access to this resource";
pub const MSG_INVALID_PERMISSIONS: &str = "Invalid permissions format";

/// Shared handles the guards need on every request.
#[derive(Clone)]
pub struct AuthState {
    pub codec: TokenCodec,
    pub revocation: Arc<dyn RevocationStore>,
}

/// Dashboard-guard state: auth handles plus the capability this route
/// demands, fixed at registration time.
#[derive(Clone)]
pub struct GuardState {
    pub auth: AuthState,
    pub capability: &'static str,
}

/// Guard for dashboard routes (capability-scoped).
pub async fn dashboard_guard(
    State(guard): State<GuardState>,
    mut req: Request,
    next: Next,
) -> Response {
    let (identity, wire) = match authenticate(&guard.auth, req.headers()).await {
        Ok(ok) => ok,
        Err(rejection) => return rejection,
    };

    // Administrative role codes bypass scope evaluation entirely: they hold
    // every capability implicitly.
    if is_admin_code(&identity.role_code) {
        req.extensions_mut()
            .insert(AuthContext::new(&identity, true, None));
        return next.run(req).await;
    }

    let grants = match grants_from_wire(&wire) {
        Ok(grants) => grants,
        Err(GrantParseError::Missing) => {
            return AuthError::Forbidden(MSG_FORBIDDEN.to_string()).into_response();
        }
        Err(GrantParseError::Malformed) => {
            return AuthError::Forbidden(MSG_INVALID_PERMISSIONS.to_string()).into_response();
        }
    };

    let Some(scope) = evaluate_scope(&grants, guard.capability) else {
        return AuthError::Forbidden(MSG_FORBIDDEN.to_string()).into_response();
    };

    req.extensions_mut()
        .insert(AuthContext::new(&identity, false, Some(scope)));
    next.run(req).await
}

/// Guard for web routes: authentication only, no capability evaluation.
pub async fn web_guard(State(auth): State<AuthState>, mut req: Request, next: Next) -> Response {
    let (identity, _wire) = match authenticate(&auth, req.headers()).await {
        Ok(ok) => ok,
        Err(rejection) => return rejection,
    };

    req.extensions_mut()
        .insert(AuthContext::new(&identity, false, None));
    next.run(req).await
}

/// Front half shared by both guards: header, signature, revocation lookup,
/// expiry, typed identity, in that order. Revocation is consulted before the
/// expiry check, so a logged-out token answers "not valid" even while
/// cryptographically fresh; the expiry check then runs even when the store
/// still reports the token live (the store TTL should have evicted it, this
/// check is the authoritative gate).
async fn authenticate(
    auth: &AuthState,
    headers: &HeaderMap,
) -> Result<(TokenIdentity, WireClaims), Response> {
    let token = bearer_token(headers)?;

    let wire = auth.codec.verify(token).map_err(|err| match err {
        TokenError::Claims(_) => AuthError::Unauthorized(MSG_INVALID_TOKEN.to_string()).into_response(),
        _ => AuthError::Unauthorized(MSG_INVALID_OR_EXPIRED.to_string()).into_response(),
    })?;

    match auth.revocation.is_live(token).await {
        Ok(true) => {}
        Ok(false) => {
            return Err(AuthError::Unauthorized(MSG_TOKEN_NOT_LIVE.to_string()).into_response());
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to validate token against revocation store");
            return Err(AuthError::Internal("Failed to validate token".to_string()).into_response());
        }
    }

    let exp = wire
        .expiry()
        .map_err(|_| AuthError::Unauthorized(MSG_INVALID_TOKEN.to_string()).into_response())?;
    if Utc::now().timestamp() > exp {
        return Err(AuthError::Unauthorized(MSG_EXPIRED.to_string()).into_response());
    }

    let identity = TokenIdentity::from_wire(&wire)
        .map_err(|_| AuthError::Unauthorized(MSG_INVALID_TOKEN.to_string()).into_response())?;

    Ok((identity, wire))
}

/// Pull the bearer token out of the `Authorization` header.
///
/// The `Bearer ` prefix is stripped when present; a header that carries the
/// raw token without the prefix is passed through and fails signature
/// verification on its own.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, Response> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| AuthError::Unauthorized(MSG_MISSING_HEADER.to_string()).into_response())?;

    let header = header
        .to_str()
        .map_err(|_| AuthError::Unauthorized(MSG_INVALID_OR_EXPIRED.to_string()).into_response())?;

    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    if token.is_empty() {
        return Err(AuthError::Unauthorized(MSG_MISSING_HEADER.to_string()).into_response());
    }

    Ok(token)
}

/// Request log line: method, path, status, latency. Bodies are never logged —
/// the session endpoints carry credentials.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = uuid::Uuid::now_v7();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(%request_id, %method, %path, status = status.as_u16(), latency_ms, "request failed");
    } else {
        tracing::info!(%request_id, %method, %path, status = status.as_u16(), latency_ms, "request completed");
    }

    response
}
