//! Registration and login use cases.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::password::PasswordHasher;
use crate::repository::UserRepository;
use crate::user::User;

/// Input for [`RegisterUser`].
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Registers a new account: rejects duplicate emails, hashes the password,
/// and persists the resulting entity.
pub struct RegisterUser {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUser {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    pub async fn execute(&self, request: RegisterRequest) -> Result<User> {
        // Duplicate check goes by the normalized email, same as storage.
        let email = request.email.trim().to_lowercase();
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(Error::EmailTaken { email });
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::create(&request.name, &email, &password_hash)?;

        tracing::info!(user_id = %user.id(), "registering new user");
        self.repository.create(user).await
    }
}

/// Input for [`LoginUser`].
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authenticates an existing account by email and password.
pub struct LoginUser {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl LoginUser {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    pub async fn execute(&self, request: LoginRequest) -> Result<User> {
        let email = request.email.trim().to_lowercase();
        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(Error::UserNotFound { email })?;

        if !self.hasher.verify(&request.password, user.password_hash())? {
            return Err(Error::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::Argon2Hasher;
    use crate::repository::InMemoryUserRepository;

    fn wired() -> (RegisterUser, LoginUser) {
        let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());
        (
            RegisterUser::new(repository.clone(), hasher.clone()),
            LoginUser::new(repository, hasher),
        )
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "Secret1!".to_string(),
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let (register, login) = wired();
        let user = register.execute(register_request()).await.unwrap();
        assert_eq!(user.email(), "alice@example.com");
        assert_ne!(user.password_hash(), "Secret1!");

        let logged_in = login
            .execute(LoginRequest {
                email: "Alice@Example.com".to_string(),
                password: "Secret1!".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.id(), user.id());
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let (register, _) = wired();
        register.execute(register_request()).await.unwrap();

        let err = register.execute(register_request()).await.unwrap_err();
        assert!(matches!(err, Error::EmailTaken { .. }));
    }

    #[tokio::test]
    async fn login_unknown_email() {
        let (_, login) = wired();
        let err = login
            .execute(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "Secret1!".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UserNotFound { .. }));
    }

    #[tokio::test]
    async fn login_wrong_password() {
        let (register, login) = wired();
        register.execute(register_request()).await.unwrap();

        let err = login
            .execute(LoginRequest {
                email: "alice@example.com".to_string(),
                password: "Wrong1!".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }
}
