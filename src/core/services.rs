use crate::core::errors::{FieldError, RosterioError};
use crate::core::models::user::{NewUser, User, UserDraft, UserUpdate};
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use tracing::info;

const NAME_MAX_LENGTH: usize = 100;
const EMAIL_MAX_LENGTH: usize = 150;

/// Mediates every read and mutation between the API layer and the store.
///
/// The service is the only component that stamps `created_at`; identity
/// assignment is delegated to the store. Validation happens here, before
/// anything touches storage, so a rejected input never leaves a half-written
/// record behind.
pub struct UserService<S: Storage> {
    storage: S,
}

impl<S: Storage> UserService<S> {
    pub fn new(storage: S) -> Self {
        UserService { storage }
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), RosterioError> {
        if value.trim().is_empty() {
            return Err(RosterioError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        if value.len() > max_length {
            return Err(RosterioError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        Ok(())
    }

    // Exactly one '@', neither first nor last character. Deliberately no
    // stricter than that; anything fancier belongs to a mail system.
    fn validate_email(&self, email: &str) -> Result<(), RosterioError> {
        let well_formed = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
            None => false,
        };
        if !well_formed {
            return Err(RosterioError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    fn validate_user_fields(&self, name: &str, email: &str) -> Result<(), RosterioError> {
        self.validate_string_input("name", name, NAME_MAX_LENGTH)?;
        self.validate_string_input("email", email, EMAIL_MAX_LENGTH)?;
        self.validate_email(email)
    }

    /// Validates the input, stamps `created_at`, and lets the store assign
    /// the id. A missing `is_active` defaults to true; `is_active` itself can
    /// never fail validation.
    pub async fn create_user(&self, input: NewUser) -> Result<User, RosterioError> {
        self.validate_user_fields(&input.name, &input.email)?;

        let draft = UserDraft {
            name: input.name,
            email: input.email,
            created_at: Utc::now(),
            is_active: input.is_active.unwrap_or(true),
        };
        let user = self.storage.insert_user(draft).await?;

        info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// No side effects; `None` is the not-found signal at this layer.
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, RosterioError> {
        self.storage.get_user(id).await
    }

    /// All records, no filtering or pagination. Search is a client-side view
    /// transform and never reaches the service.
    pub async fn list_users(&self) -> Result<Vec<User>, RosterioError> {
        self.storage.list_users().await
    }

    /// Replaces name/email/is_active wholesale, leaving `id` and
    /// `created_at` untouched. There is no partial update.
    pub async fn update_user(&self, id: i64, input: UserUpdate) -> Result<User, RosterioError> {
        self.validate_user_fields(&input.name, &input.email)?;

        let user = self
            .storage
            .replace_user(id, input)
            .await?
            .ok_or(RosterioError::UserNotFound(id))?;

        info!(user_id = id, "user updated");
        Ok(user)
    }

    /// Hard delete. A second delete of the same id reports `UserNotFound`,
    /// the same as deleting an id that never existed.
    pub async fn delete_user(&self, id: i64) -> Result<(), RosterioError> {
        if !self.storage.delete_user(id).await? {
            return Err(RosterioError::UserNotFound(id));
        }

        info!(user_id = id, "user deleted");
        Ok(())
    }
}
