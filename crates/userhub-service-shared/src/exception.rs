//! The API exception taxonomy.
//!
//! Every failed request, whatever its origin, is reported to clients through
//! one canonical envelope: `{ message, globalErrors, fieldErrors }`. This
//! module provides the error units, the [`ApiException`] carrying them
//! together with an HTTP status class, and the fixed error-code catalog.
//!
//! Classification happens through named constructors (validation, bad
//! request, unauthorized, forbidden, not found, internal) rather than a type
//! hierarchy; the status class is the tag.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use userhub_lib::Error as LibError;

/// Fixed catalog of API error codes and their messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// API_E_001: upstream timed out.
    ServerTimeout,
    /// API_E_002: unspecified internal failure.
    ServerInternal,
    /// API_E_003: caller is not authenticated.
    Unauthenticated,
    /// API_E_004: caller is not allowed to do this.
    Unauthorized,
    /// API_E_005: requested resource does not exist.
    NotFound,
    /// API_E_006: request is malformed.
    BadRequest,
    /// API_E_007: input failed field validation.
    FieldValidation,
    /// API_E_008: registration email is already taken.
    EmailTaken,
    /// API_E_009: no route matched the request.
    RouterNotFound,
}

impl ErrorCode {
    /// Stable identifier carried in the `errorId` field.
    pub fn id(&self) -> &'static str {
        match self {
            ErrorCode::ServerTimeout => "API_E_001",
            ErrorCode::ServerInternal => "API_E_002",
            ErrorCode::Unauthenticated => "API_E_003",
            ErrorCode::Unauthorized => "API_E_004",
            ErrorCode::NotFound => "API_E_005",
            ErrorCode::BadRequest => "API_E_006",
            ErrorCode::FieldValidation => "API_E_007",
            ErrorCode::EmailTaken => "API_E_008",
            ErrorCode::RouterNotFound => "API_E_009",
        }
    }

    /// Fixed human-readable message for the code.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::ServerTimeout => "Server time out",
            ErrorCode::ServerInternal => "Server internal",
            ErrorCode::Unauthenticated => "Unauthenticated",
            ErrorCode::Unauthorized => "Unauthorized",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::BadRequest => "Bad request",
            ErrorCode::FieldValidation => "Field validation error",
            ErrorCode::EmailTaken => "User with this email already exists",
            ErrorCode::RouterNotFound => "Router not found",
        }
    }
}

/// An error not tied to a specific input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppGlobalError {
    pub error_id: String,
    pub error_message: String,
}

impl AppGlobalError {
    pub fn new(error_id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error_id: error_id.into(),
            error_message: error_message.into(),
        }
    }

    /// Global error for a catalog code, with its fixed message.
    pub fn code(code: ErrorCode) -> Self {
        Self::new(code.id(), code.message())
    }

    /// The fixed global error reported for unclassified server failures.
    pub fn server_error() -> Self {
        Self::new("SERVER_ERROR", ErrorCode::ServerInternal.message())
    }
}

/// An error tied to one named input field. Multiple violations of the same
/// field are joined into a single message by the validator adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppFieldError {
    pub field: String,
    pub error_message: String,
}

impl AppFieldError {
    pub fn new(field: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error_message: error_message.into(),
        }
    }
}

/// The canonical JSON body returned for any failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub message: String,
    pub global_errors: Vec<AppGlobalError>,
    pub field_errors: Vec<AppFieldError>,
}

/// A typed request failure: an HTTP status class plus structured detail.
///
/// Handlers and guards raise this (directly or via `From` conversions) and
/// never catch it; the error boundary turns it into the envelope.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiException {
    status: StatusCode,
    message: String,
    global_errors: Vec<AppGlobalError>,
    field_errors: Vec<AppFieldError>,
}

impl ApiException {
    /// Create an exception with a bare message and no structured detail.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            global_errors: Vec::new(),
            field_errors: Vec::new(),
        }
    }

    /// The guard's failure: 400 with the fixed message and the produced
    /// field errors.
    pub fn validation(field_errors: Vec<AppFieldError>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Client validation error").with_field_errors(field_errors)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Attach a single global error.
    pub fn with_global_error(mut self, error: AppGlobalError) -> Self {
        self.global_errors.push(error);
        self
    }

    /// Replace the global error list.
    pub fn with_global_errors(mut self, errors: Vec<AppGlobalError>) -> Self {
        self.global_errors = errors;
        self
    }

    /// Replace the field error list.
    pub fn with_field_errors(mut self, errors: Vec<AppFieldError>) -> Self {
        self.field_errors = errors;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn global_errors(&self) -> &[AppGlobalError] {
        &self.global_errors
    }

    pub fn field_errors(&self) -> &[AppFieldError] {
        &self.field_errors
    }

    /// The envelope this exception serializes to.
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            message: self.message.clone(),
            global_errors: self.global_errors.clone(),
            field_errors: self.field_errors.clone(),
        }
    }
}

impl IntoResponse for ApiException {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope())).into_response()
    }
}

/// Map domain errors onto the HTTP taxonomy.
///
/// Status/message/global pairings mirror what the use cases report: a taken
/// email is a 400 with `API_E_008`, an unknown login email is a 404 carrying
/// the `Unauthenticated` message and the `API_E_005` global error, and a
/// wrong password is a 401 with `API_E_004`.
impl From<LibError> for ApiException {
    fn from(err: LibError) -> Self {
        match err {
            LibError::EmailTaken { .. } => {
                ApiException::bad_request(ErrorCode::EmailTaken.message())
                    .with_global_error(AppGlobalError::code(ErrorCode::EmailTaken))
            }
            LibError::UserNotFound { .. } => {
                ApiException::not_found(ErrorCode::Unauthenticated.message())
                    .with_global_error(AppGlobalError::code(ErrorCode::NotFound))
            }
            LibError::InvalidCredentials => {
                ApiException::unauthorized(ErrorCode::Unauthorized.message())
                    .with_global_error(AppGlobalError::code(ErrorCode::Unauthorized))
            }
            LibError::InvalidUser { message } => ApiException::bad_request(message)
                .with_global_error(AppGlobalError::code(ErrorCode::BadRequest)),
            LibError::PasswordHash(_) => {
                ApiException::internal(ErrorCode::ServerInternal.message())
                    .with_global_error(AppGlobalError::server_error())
            }
        }
    }
}
