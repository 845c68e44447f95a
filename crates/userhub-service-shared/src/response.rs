//! Success envelope for positive replies.
//!
//! The counterpart of the error envelope: every successful request replies
//! with `{ success: true, message, data }`. Handlers build one of these and
//! convert it into a response themselves; the error boundary never touches
//! the success path.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// A successful reply with payload, message, and status.
#[derive(Debug, Clone)]
pub struct SuccessResponse<T> {
    data: T,
    message: String,
    status: StatusCode,
}

#[derive(Debug, Serialize)]
struct SuccessBody<T> {
    success: bool,
    message: String,
    data: T,
}

impl<T> SuccessResponse<T> {
    /// A 200 reply with the default `"OK"` message.
    pub fn ok(data: T) -> Self {
        Self {
            data,
            message: "OK".to_string(),
            status: StatusCode::OK,
        }
    }

    /// A 201 reply with the default `"Created"` message.
    pub fn created(data: T) -> Self {
        Self {
            data,
            message: "Created".to_string(),
            status: StatusCode::CREATED,
        }
    }

    /// Override the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Override the status code.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for SuccessResponse<T> {
    fn into_response(self) -> Response {
        let body = SuccessBody {
            success: true,
            message: self.message,
            data: self.data,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn ok_defaults() {
        let response = SuccessResponse::ok(json!({"id": 1})).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "OK");
        assert_eq!(body["data"]["id"], 1);
    }

    #[tokio::test]
    async fn created_defaults() {
        let response = SuccessResponse::created(json!(null)).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Created");
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn overrides() {
        let response = SuccessResponse::ok(json!([]))
            .with_message("All good")
            .with_status(StatusCode::ACCEPTED)
            .into_response();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(body_json(response).await["message"], "All good");
    }

    #[test]
    fn null_data_is_allowed() {
        let response = SuccessResponse::ok(Value::Null);
        assert_eq!(response.message(), "OK");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
