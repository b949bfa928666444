use crate::core::errors::RosterioError;
use crate::core::models::user::{User, UserDraft, UserUpdate};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local [`Storage`] backed by a `BTreeMap`, which keeps iteration
/// in ascending id order for free.
#[derive(Clone)]
pub struct InMemoryStorage {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
    // Monotonic; deletions leave gaps rather than freeing ids for reuse.
    next_id: Arc<AtomicI64>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn insert_user(&self, draft: UserDraft) -> Result<User, RosterioError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            name: draft.name,
            email: draft.email,
            created_at: draft.created_at,
            is_active: draft.is_active,
        };
        let mut users = self.users.write().await;
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, RosterioError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, RosterioError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn replace_user(
        &self,
        id: i64,
        fields: UserUpdate,
    ) -> Result<Option<User>, RosterioError> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.name = fields.name;
                user.email = fields.email;
                user.is_active = fields.is_active;
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_user(&self, id: i64) -> Result<bool, RosterioError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }
}
