//! Application state for the HTTP service.
//!
//! This is the composition root: [`AppState::new`] is invoked once at
//! startup, wires the use cases from the supplied ports, and hands the
//! result to the route table builders. Handlers access the already-wired use
//! cases through the accessors; there is no ambient registry to resolve
//! from.

use std::sync::Arc;

use userhub_lib::{
    Argon2Hasher, GetProfile, InMemoryUserRepository, LoginUser, PasswordHasher, RegisterUser,
    UserRepository,
};

/// Shared application state, cheap to clone (`Arc` inside).
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    register_user: RegisterUser,
    login_user: LoginUser,
    get_profile: GetProfile,
}

impl AppState {
    /// Wire the use cases from the given ports. Called once at startup.
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                register_user: RegisterUser::new(repository.clone(), hasher.clone()),
                login_user: LoginUser::new(repository.clone(), hasher),
                get_profile: GetProfile::new(repository),
            }),
        }
    }

    /// Development/test wiring: in-memory store plus the Argon2 hasher.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2Hasher::new()),
        )
    }

    pub fn register_user(&self) -> &RegisterUser {
        &self.inner.register_user
    }

    pub fn login_user(&self) -> &LoginUser {
        &self.inner.login_user
    }

    pub fn get_profile(&self) -> &GetProfile {
        &self.inner.get_profile
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
