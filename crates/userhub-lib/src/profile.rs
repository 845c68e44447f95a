//! Profile lookup use case.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::Result;
use crate::repository::UserRepository;
use crate::user::User;

/// Fetches a user's profile by id. A missing user is not an error; the
/// presentation layer decides how to report it.
pub struct GetProfile {
    repository: Arc<dyn UserRepository>,
}

impl GetProfile {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user_id: Uuid) -> Result<Option<User>> {
        self.repository.find_by_id(user_id).await
    }
}
