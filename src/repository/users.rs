//! User domain methods on Repository

use super::Repository;
use crate::models::{NewUser, User};

impl Repository {
    pub async fn users_list(&self) -> Vec<User> {
        self.store.read().await.users.values().cloned().collect()
    }

    /// Get user by ID
    pub async fn users_get_by_id(&self, id: i32) -> Option<User> {
        self.store.read().await.users.get(&id).cloned()
    }

    /// Get user by username (case-sensitive)
    pub async fn users_get_by_username(&self, username: &str) -> Option<User> {
        self.store
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    pub async fn users_create(&self, data: NewUser) -> User {
        let mut store = self.store.write().await;
        let user = User {
            id: self.sequences.users.next(),
            username: data.username,
            password_hash: data.password_hash,
            role: data.role,
        };
        store.users.insert(user.id, user.clone());
        user
    }
}
