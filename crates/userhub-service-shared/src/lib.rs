//! Shared HTTP infrastructure for the UserHub service.
//!
//! This crate turns a declarative, data-only [`RouteTable`] into live axum
//! registrations, inserting schema validation in front of handlers and
//! normalizing every failure into one canonical error envelope:
//!
//! ```text
//! RouteTable ──▶ apply_routes ──▶ axum registrations
//!                    │
//!                    ├─ build_path        /api/<group>.<endpoint>[/:param...]
//!                    └─ guard (optional)  merge body+params ─▶ validate(schema)
//!
//! request ──▶ guard ──▶ handler ──▶ SuccessResponse
//!               │           │
//!               └───────────┴──▶ error_response ──▶ { message, globalErrors, fieldErrors }
//! ```
//!
//! Provided pieces:
//!
//! - [`RouteTable`] / [`RouteGroup`] / [`Endpoint`]: the immutable route table
//! - [`Schema`]: closed-variant input schemas with ordered violations
//! - [`validate`]: schema failures → per-field error lists
//! - [`apply_routes`]: table walking and registration, fail-fast on conflicts
//! - [`ApiException`]: the typed failure carried to the error boundary
//! - [`error_response`] / [`router_not_found`]: the boundary and the fallback
//! - [`SuccessResponse`]: the positive envelope `{ success, message, data }`
//! - [`AppState`]: the composition root handed to route builders
//! - [`logging`], [`middleware`], [`health_check`]: ambient service plumbing
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides a pre-wired in-memory state and
//! seeding helpers. Enable the `test-utils` feature to access it from
//! dependent crates.

mod apply;
mod errors;
mod exception;
mod health;
pub mod logging;
pub mod middleware;
mod path;
mod response;
mod route;
mod schema;
mod state;
mod validate;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use apply::{apply_routes, ApplyError};
pub use errors::{error_response, router_not_found};
pub use exception::{ApiException, AppFieldError, AppGlobalError, ErrorCode, ErrorEnvelope};
pub use health::{health_check, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, track_requests, RequestId};
pub use path::build_path;
pub use response::SuccessResponse;
pub use route::{
    handler, Endpoint, Handler, HandlerFuture, Method, RequestContext, RouteGroup, RouteTable,
};
pub use schema::{FieldSchema, Issues, RefineFn, Schema, Violation};
pub use state::AppState;
pub use validate::validate;
