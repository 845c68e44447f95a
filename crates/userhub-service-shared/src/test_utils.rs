//! Test utilities for handler and boundary testing.
//!
//! Enable the `test-utils` feature to use these from dependent crates.

use userhub_lib::{RegisterRequest, User};

use crate::state::AppState;

/// A freshly wired in-memory [`AppState`]. Each call returns an independent
/// state with its own user store, so tests never observe each other's users.
pub fn test_state() -> AppState {
    AppState::in_memory()
}

/// Register a user directly through the use case, bypassing HTTP.
///
/// # Panics
///
/// Panics when registration fails; that indicates a broken test fixture.
pub async fn seed_user(state: &AppState, name: &str, email: &str, password: &str) -> User {
    state
        .register_user()
        .execute(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .unwrap_or_else(|e| panic!("failed to seed user {email}: {e}"))
}
