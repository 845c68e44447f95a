use thiserror::Error;

/// Convenient result alias for the UserHub library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when registration is attempted with an email that is taken.
    #[error("user with email {email} already exists")]
    EmailTaken { email: String },

    /// Raised when a login email does not match any stored user.
    #[error("no user found for email {email}")]
    UserNotFound { email: String },

    /// Raised when the supplied password does not match the stored hash.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Raised when an entity invariant is violated at construction time.
    #[error("invalid user data: {message}")]
    InvalidUser { message: String },

    /// Raised when password hashing or verification fails internally.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

impl Error {
    /// True when the error is caused by the caller's input rather than the
    /// service's own state.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::PasswordHash(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_email() {
        let err = Error::EmailTaken {
            email: "a@b.com".to_string(),
        };
        assert!(err.to_string().contains("a@b.com"));
    }

    #[test]
    fn classification() {
        assert!(Error::InvalidCredentials.is_client_error());
        assert!(!Error::PasswordHash("oom".to_string()).is_client_error());
    }
}
