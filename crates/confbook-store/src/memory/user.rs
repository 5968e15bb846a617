//! In-memory user store backed by a concurrent map.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::info;

use confbook_core::error::AppError;
use confbook_core::result::AppResult;
use confbook_entity::User;

use crate::traits::UserStore;

/// In-memory user store. Insert-if-absent goes through the map's entry API,
/// so duplicate registration is detected atomically.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<DashMap<String, User>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: User) -> AppResult<()> {
        match self.users.entry(user.id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "User '{}' already exists",
                user.id
            ))),
            Entry::Vacant(slot) => {
                info!(user_id = %user.id, "User registered");
                slot.insert(user);
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> AppResult<User> {
        self.users
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("User '{id}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use confbook_core::error::ErrorKind;

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryUserStore::new();
        store.create(User::new("user1", Utc::now())).await.unwrap();
        assert_eq!(store.find_by_id("user1").await.unwrap().id, "user1");
    }

    #[tokio::test]
    async fn test_duplicate_conflicts() {
        let store = MemoryUserStore::new();
        store.create(User::new("user1", Utc::now())).await.unwrap();
        let err = store
            .create(User::new("user1", Utc::now()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_missing_user() {
        let store = MemoryUserStore::new();
        let err = store.find_by_id("ghost").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
