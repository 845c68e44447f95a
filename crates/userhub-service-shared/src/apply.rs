//! Wiring the route table into an axum [`Router`].
//!
//! The applier walks the table in declaration order, builds the concrete
//! path for every endpoint, and registers one axum handler per endpoint.
//! When an endpoint declares a schema, a guard runs before the handler: the
//! request body and path parameters are merged into one object and validated;
//! a failure becomes a 400 validation exception and the handler is never
//! invoked. On success the handler receives the *raw* body and parameters.
//!
//! Registration is one-shot at startup. Two endpoints resolving to the same
//! (method, path) pair are rejected up front instead of silently shadowing
//! each other.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::RawPathParams,
    response::Response,
    routing::{delete, get, patch, post, put, MethodRouter},
    Router,
};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::errors::error_response;
use crate::exception::ApiException;
use crate::path::build_path;
use crate::route::{Endpoint, Handler, Method, RequestContext, RouteTable};
use crate::schema::Schema;
use crate::validate::validate;

/// Startup failure while applying a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// Two endpoints resolved to the same method and path.
    #[error("duplicate route registered: {method} {path}")]
    DuplicateRoute { method: Method, path: String },
}

/// Register every endpoint of `table` on `router`.
///
/// Iteration order is the table's declaration order, so registration is
/// reproducible across runs and across server instances.
pub fn apply_routes(mut router: Router, table: &RouteTable) -> Result<Router, ApplyError> {
    let mut seen: HashSet<(Method, String)> = HashSet::new();

    for group in table.groups() {
        for (name, endpoint) in group.endpoints() {
            let path = build_path(group.name(), name, endpoint.params());
            if !seen.insert((endpoint.method(), path.clone())) {
                return Err(ApplyError::DuplicateRoute {
                    method: endpoint.method(),
                    path,
                });
            }

            tracing::debug!(method = %endpoint.method(), path = %path, "registering route");
            router = router.route(&path, method_router(endpoint));
        }
    }

    Ok(router)
}

fn method_router(endpoint: &Endpoint) -> MethodRouter {
    let handler = endpoint.handler().clone();
    let validator = endpoint.validator().cloned();

    let call = move |params: RawPathParams, body: Bytes| {
        let handler = handler.clone();
        let validator = validator.clone();
        async move { dispatch(handler, validator, params, body).await }
    };

    match endpoint.method() {
        Method::Get => get(call),
        Method::Post => post(call),
        Method::Put => put(call),
        Method::Patch => patch(call),
        Method::Delete => delete(call),
    }
}

/// Guard-then-handler pipeline for one request. This closure is the error
/// boundary: whatever the guard or handler raises is normalized here and
/// nowhere else.
async fn dispatch(
    handler: Handler,
    validator: Option<Arc<Schema>>,
    raw_params: RawPathParams,
    body: Bytes,
) -> Response {
    // An absent body reads as an empty object; malformed JSON is an
    // unclassified error, surfaced with the parser's own message.
    let body: Value = if body.is_empty() {
        Value::Object(Map::new())
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(err) => return error_response(err.into()),
        }
    };

    let params: Vec<(String, String)> = raw_params
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    let ctx = RequestContext::new(body, params);

    if let Some(schema) = validator {
        if let Err(field_errors) = validate(&schema, &ctx.merged()) {
            return error_response(ApiException::validation(field_errors).into());
        }
    }

    match handler(ctx).await {
        Ok(response) => response,
        Err(err) => error_response(err),
    }
}
