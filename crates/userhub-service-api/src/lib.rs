//! UserHub account HTTP API.
//!
//! Thin presentation layer over `userhub-lib`: controllers parse input and
//! call use cases, the declarative route table in [`routes`] describes the
//! surface, and [`build_app`] assembles the final router with validation,
//! error normalization, health check, and the not-found fallback.

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use userhub_service_shared::{
    apply_routes, health_check, router_not_found, track_requests, AppState, ApplyError,
};

pub mod controllers;
pub mod routes;
pub mod schemas;

/// Assemble the full application router for the given state.
///
/// Route registration is one-shot; a duplicate (method, path) pair in the
/// table is a startup error. The not-found fallback is installed last so it
/// only answers requests nothing else matched.
pub fn build_app(state: &AppState) -> Result<Router, ApplyError> {
    let router = apply_routes(Router::new(), &routes::app_routes(state))?;

    Ok(router
        .route("/health-check", get(health_check))
        .fallback(router_not_found)
        .layer(middleware::from_fn(track_requests))
        .layer(CorsLayer::permissive()))
}
