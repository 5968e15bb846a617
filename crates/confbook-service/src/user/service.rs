//! User registration service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use confbook_core::error::AppError;
use confbook_core::result::AppResult;
use confbook_core::traits::Clock;
use confbook_entity::User;
use confbook_store::UserStore;

/// Request to register a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddUserRequest {
    /// Unique user id.
    pub id: String,
}

/// Registers users that can then book conferences.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Time source for `created_at`.
    clock: Arc<dyn Clock>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    /// Stores a new user. Fails with `Conflict` if the id is taken.
    pub async fn add_user(&self, req: AddUserRequest) -> AppResult<User> {
        let id = req.id.trim();
        if id.is_empty() {
            return Err(AppError::invalid_input("User id must not be blank"));
        }

        let user = User::new(id, self.clock.now());
        self.users.create(user.clone()).await?;

        info!(user_id = %user.id, "User added");
        Ok(user)
    }

    /// Looks up a user by id.
    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.users.find_by_id(id).await
    }
}
