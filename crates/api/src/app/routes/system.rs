use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::AuthContext;
use crate::middleware::{self, AuthState};

pub fn router(auth: &AuthState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/whoami",
            get(whoami).route_layer(axum::middleware::from_fn_with_state(
                auth.clone(),
                middleware::web_guard,
            )),
        )
}

/// GET /health — process liveness plus a revocation-store round-trip.
pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.revocation.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "revocation store unreachable");
            errors::json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "unavailable",
                "revocation store unreachable",
            )
        }
    }
}

/// GET /whoami — echo the authenticated identity (web guard, no capability).
pub async fn whoami(Extension(ctx): Extension<AuthContext>) -> impl IntoResponse {
    Json(json!({
        "user_id": ctx.user_id(),
        "role_id": ctx.role_id(),
        "role_name": ctx.role_name(),
        "role_code": ctx.role_code(),
        "is_admin": ctx.is_admin(),
        "scope": ctx.scope().map(|s| s.as_str()),
    }))
}
