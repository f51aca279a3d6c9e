use axum::Router;

use crate::middleware::AuthState;

pub mod auth;
pub mod system;
pub mod users;

/// Assemble all routes. Each guarded route carries its guard (and, for
/// dashboard routes, its required capability) attached at registration; the
/// session endpoints are public.
pub fn router(auth: &AuthState) -> Router {
    Router::new()
        .merge(system::router(auth))
        .merge(auth::router(auth))
        .merge(users::router(auth))
}
