use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Generic message returned to clients whenever the real cause is internal.
pub const MSG_INTERNAL: &str = "An unexpected error occurred. Please try again later.";

/// Request-terminal errors of the authorization/session layer.
///
/// `Unauthorized` and `Forbidden` carry messages that are safe to show;
/// `Internal` carries server-side detail that is logged and replaced with a
/// generic message before it reaches the client.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthorized(msg) => {
                json_error(StatusCode::UNAUTHORIZED, "unauthorized", msg)
            }
            AuthError::Forbidden(msg) => json_error(StatusCode::FORBIDDEN, "forbidden", msg),
            AuthError::BadRequest(msg) => json_error(StatusCode::BAD_REQUEST, "bad_request", msg),
            AuthError::Internal(detail) => {
                tracing::error!(detail = %detail, "internal error");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    MSG_INTERNAL,
                )
            }
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Outermost panic boundary: log a bounded description server-side, answer
/// with a generic 500. No payload or backtrace ever reaches the client.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };

    tracing::error!(panic = %detail, "request handler panicked");

    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        MSG_INTERNAL,
    )
}
