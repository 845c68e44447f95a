//! The account domain entity and its public projection.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Accepts `local@domain.tld` with no whitespace in any part.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// A registered account.
///
/// Instances are only created through [`User::create`] (which enforces the
/// entity invariants) or rehydrated from storage via [`User::from_parts`].
/// The password is stored as an opaque hash; this type never sees plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    blocked: bool,
}

impl User {
    /// Create a new user, enforcing invariants.
    ///
    /// The name is trimmed, the email lowercased. Fails with
    /// [`Error::InvalidUser`] when the name is empty, the email is malformed,
    /// or the hash is empty.
    pub fn create(name: &str, email: &str, password_hash: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidUser {
                message: "name is required and cannot be empty".to_string(),
            });
        }

        let email = email.trim().to_lowercase();
        if !EMAIL_REGEX.is_match(&email) {
            return Err(Error::InvalidUser {
                message: format!("invalid email format: {email}"),
            });
        }

        if password_hash.is_empty() {
            return Err(Error::InvalidUser {
                message: "password hash cannot be empty".to_string(),
            });
        }

        Ok(Self {
            id: Uuid::now_v7(),
            name: name.to_string(),
            email,
            password_hash: password_hash.to_string(),
            blocked: false,
        })
    }

    /// Rehydrate a user from stored fields without re-checking invariants.
    pub fn from_parts(
        id: Uuid,
        name: String,
        email: String,
        password_hash: String,
        blocked: bool,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            blocked,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn block(&mut self) {
        self.blocked = true;
    }

    pub fn unblock(&mut self) {
        self.blocked = false;
    }
}

/// Public projection of a [`User`], safe to serialize into responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_blocked: bool,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_blocked: user.blocked,
        }
    }
}
