//! Dashboard user listing — the representative scope-filtered route.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use warden_auth::capability;
use warden_core::AccessScope;
use warden_infra::UserSummary;

use crate::app::errors::AuthError;
use crate::app::services::AppServices;
use crate::context::AuthContext;
use crate::middleware::{self, AuthState, GuardState};

pub fn router(auth: &AuthState) -> Router {
    Router::new().route(
        "/users",
        get(list_users).route_layer(axum::middleware::from_fn_with_state(
            GuardState {
                auth: auth.clone(),
                capability: capability::USER_READ,
            },
            middleware::dashboard_guard,
        )),
    )
}

/// GET /users — list users, filtered by the caller's resolved scope.
pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
) -> Response {
    let users = match services.identity.list().await {
        Ok(users) => users,
        Err(err) => return AuthError::Internal(err.to_string()).into_response(),
    };

    // Row-level scoping: `own` restricts to rows created by the caller;
    // `all` and administrative callers see everything.
    let users: Vec<UserSummary> = match ctx.scope() {
        Some(AccessScope::Own) => users
            .into_iter()
            .filter(|u| u.created_by == ctx.user_id())
            .collect(),
        _ => users,
    };

    (
        StatusCode::OK,
        Json(json!({
            "message": "OK",
            "scope": ctx.scope().map(|s| s.as_str()),
            "data": users,
        })),
    )
        .into_response()
}
