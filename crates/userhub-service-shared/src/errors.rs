//! The error boundary.
//!
//! Guards and handlers never build error responses; anything they raise ends
//! up here. [`error_response`] is the only place that inspects an error's
//! type: an [`ApiException`] keeps its status class and structured detail,
//! everything else collapses to a 500 with the fixed `SERVER_ERROR` global
//! error. The raw message is preserved in the body while the error's kind is
//! hidden; the full error is logged server-side before normalization.
//!
//! [`router_not_found`] is the separate fallback for requests that matched no
//! registered route; it must be installed last so it only fires when nothing
//! else did.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};

use crate::exception::{ApiException, AppGlobalError, ErrorCode, ErrorEnvelope};

/// Serialize any escaped error into the canonical envelope.
pub fn error_response(err: BoxError) -> Response {
    tracing::error!(error = %err, "request failed");

    match err.downcast::<ApiException>() {
        Ok(exception) => (*exception).into_response(),
        Err(other) => {
            let mut message = other.to_string();
            if message.is_empty() {
                message = "An unexpected error occurred".to_string();
            }
            let envelope = ErrorEnvelope {
                message,
                global_errors: vec![AppGlobalError::server_error()],
                field_errors: Vec::new(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
        }
    }
}

/// Fallback for unmatched routes: a fixed 404 envelope.
pub async fn router_not_found() -> Response {
    let envelope = ErrorEnvelope {
        message: "Router Not Found".to_string(),
        global_errors: vec![AppGlobalError::code(ErrorCode::RouterNotFound)],
        field_errors: Vec::new(),
    };
    (StatusCode::NOT_FOUND, Json(envelope)).into_response()
}
