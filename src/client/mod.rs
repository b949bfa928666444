use crate::core::errors::RosterioError;
use crate::core::models::user::{NewUser, User, UserUpdate};
use async_trait::async_trait;

/// User-record operations as seen from a client. Implemented over HTTP by
/// [`HttpUserApi`]; tests substitute in-process doubles.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, RosterioError>;
    /// Resolves to [`RosterioError::UserNotFound`] when the record is absent.
    async fn get_user(&self, id: i64) -> Result<User, RosterioError>;
    async fn create_user(&self, new_user: NewUser) -> Result<User, RosterioError>;
    async fn update_user(&self, id: i64, fields: UserUpdate) -> Result<User, RosterioError>;
    async fn delete_user(&self, id: i64) -> Result<(), RosterioError>;
}

pub mod http;
pub mod view;

pub use http::HttpUserApi;
pub use view::{UserListView, ViewPhase};
