//! UserHub library entry points.
//!
//! This crate holds the account domain: the [`User`] entity, the repository
//! and password-hashing ports, and the use cases built on top of them.
//! Higher-level consumers (the HTTP service) should only depend on the types
//! exported here instead of reimplementing behavior. Nothing in this crate
//! knows about HTTP.

pub mod auth;
pub mod error;
pub mod password;
pub mod profile;
pub mod repository;
pub mod user;

pub use auth::{LoginRequest, LoginUser, RegisterRequest, RegisterUser};
pub use error::{Error, Result};
pub use password::{Argon2Hasher, PasswordHasher};
pub use profile::GetProfile;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use user::{User, UserDto};
