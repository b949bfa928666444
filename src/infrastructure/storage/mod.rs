use crate::core::errors::RosterioError;
use crate::core::models::user::{User, UserDraft, UserUpdate};
use async_trait::async_trait;

/// Durable table of user records. Absence travels as `Option`/`bool`; the
/// error channel is reserved for infrastructure faults.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Assigns the next id and persists the draft. Ids are never reused,
    /// even after deletion.
    async fn insert_user(&self, draft: UserDraft) -> Result<User, RosterioError>;
    async fn get_user(&self, id: i64) -> Result<Option<User>, RosterioError>;
    /// Every record, in ascending id order.
    async fn list_users(&self) -> Result<Vec<User>, RosterioError>;
    /// Overwrites name/email/is_active, leaving id and created_at untouched.
    /// Returns `None` when the id is absent.
    async fn replace_user(&self, id: i64, fields: UserUpdate)
        -> Result<Option<User>, RosterioError>;
    /// Hard delete. Returns whether the record existed.
    async fn delete_user(&self, id: i64) -> Result<bool, RosterioError>;
}

pub mod in_memory;
