//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: injected collaborators + the two-phase session issuer
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses + the panic boundary

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// The panic boundary is outermost: anything that unwinds inside a handler
/// or layer is logged and answered with a generic 500.
pub fn build_app(services: Arc<AppServices>) -> Router {
    let auth_state = services.auth_state();

    Router::new()
        .merge(routes::router(&auth_state))
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(errors::handle_panic))
                .layer(axum::middleware::from_fn(middleware::request_log)),
        )
}
