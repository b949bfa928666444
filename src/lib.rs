pub mod api;
pub mod client;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::client::{HttpUserApi, UserApi, UserListView, ViewPhase};
pub use crate::config::Config;
pub use crate::core::errors::RosterioError;
pub use crate::core::services::UserService;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests; // Include integration tests
