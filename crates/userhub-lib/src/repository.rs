//! User persistence port and the in-memory implementation.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::user::User;

/// Port for user storage.
///
/// Lookups return `Ok(None)` for absent users; `Err` is reserved for storage
/// failures so that fallible backends fit without changing the use cases.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> Result<User>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn update(&self, user: User) -> Result<()>;
    async fn delete(&self, id: Uuid) -> Result<()>;
    async fn all(&self) -> Result<Vec<User>>;
}

/// In-memory [`UserRepository`] used for development and testing.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User> {
        let mut users = self.users.write().expect("user store lock poisoned");
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().expect("user store lock poisoned");
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().expect("user store lock poisoned");
        Ok(users.iter().find(|u| u.email() == email).cloned())
    }

    async fn update(&self, user: User) -> Result<()> {
        let mut users = self.users.write().expect("user store lock poisoned");
        if let Some(slot) = users.iter_mut().find(|u| u.id() == user.id()) {
            *slot = user;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut users = self.users.write().expect("user store lock poisoned");
        users.retain(|u| u.id() != id);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<User>> {
        let users = self.users.read().expect("user store lock poisoned");
        Ok(users.clone())
    }
}
