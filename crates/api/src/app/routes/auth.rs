//! Session endpoints: two-phase dashboard issuance, direct login, logout.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use crate::app::dto::{LoginRequest, TokenRequest};
use crate::app::errors::AuthError;
use crate::app::services::{AppServices, SessionError};
use crate::middleware::{self, AuthState};

pub fn router(auth: &AuthState) -> Router {
    Router::new()
        .route("/auth/validate", post(validate_credentials))
        .route("/auth/token", post(generate_access_token))
        .route("/auth/login", post(login))
        .route(
            "/auth/logout",
            post(logout).route_layer(axum::middleware::from_fn_with_state(
                auth.clone(),
                middleware::web_guard,
            )),
        )
}

/// POST /auth/validate — phase 1: credentials in, temporary token out.
pub async fn validate_credentials(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<LoginRequest>,
) -> Response {
    if let Err(msg) = body.validate() {
        return AuthError::BadRequest(msg.to_string()).into_response();
    }

    match services
        .validate_credentials(&body.username_or_email, &body.password)
        .await
    {
        Ok(token) => token_response("Temporary token generated", token),
        Err(err) => session_error_response(err),
    }
}

/// POST /auth/token — phase 2: temporary token in, registered access token
/// out.
pub async fn generate_access_token(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<TokenRequest>,
) -> Response {
    if let Err(msg) = body.validate() {
        return AuthError::BadRequest(msg.to_string()).into_response();
    }

    match services.redeem_temporary_token(&body.temporary_token).await {
        Ok(token) => token_response("Access token generated", token),
        Err(err) => session_error_response(err),
    }
}

/// POST /auth/login — direct web login, no temporary-token phase.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<LoginRequest>,
) -> Response {
    if let Err(msg) = body.validate() {
        return AuthError::BadRequest(msg.to_string()).into_response();
    }

    match services
        .login(&body.username_or_email, &body.password)
        .await
    {
        Ok(token) => token_response("Access token generated", token),
        Err(err) => session_error_response(err),
    }
}

/// POST /auth/logout — delete the presented token from the revocation store.
///
/// Registered behind the web guard, so only a currently-live token reaches
/// this handler; the deletion itself is idempotent regardless.
pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> Response {
    let token = match middleware::bearer_token(&headers) {
        Ok(token) => token.to_string(),
        Err(rejection) => return rejection,
    };

    match services.logout(&token).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Successfully logged out" })),
        )
            .into_response(),
        Err(err) => session_error_response(err),
    }
}

fn token_response(message: &'static str, token: String) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "message": message, "data": { "token": token } })),
    )
        .into_response()
}

/// One place maps issuer failures onto the response taxonomy. Unknown
/// identifier, wrong password, and unresolvable redemption subjects all
/// come out as 401 with messages that confirm nothing.
fn session_error_response(err: SessionError) -> Response {
    match err {
        SessionError::InvalidCredentials => {
            AuthError::Unauthorized("Login failed, invalid username or password".to_string())
        }
        SessionError::InvalidTemporaryToken => {
            AuthError::Unauthorized("Invalid or expired temporary token".to_string())
        }
        SessionError::IdentityNotFound => AuthError::Unauthorized("Unauthorized".to_string()),
        SessionError::Internal(detail) => AuthError::Internal(detail),
    }
    .into_response()
}
