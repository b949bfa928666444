use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user record as held by the store and echoed over the wire.
///
/// `id` and `created_at` are server-assigned and immutable for the record's
/// lifetime; `name`, `email` and `is_active` are replaced wholesale on every
/// update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Create input. `id` and `created_at` are never client-supplied; a missing
/// `is_active` defaults to true.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Update input: the full name/email/is_active triplet. There is no partial
/// merge; fields absent here are not preserved from the stored record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

/// A validated, timestamp-stamped record awaiting identity assignment.
/// Built only by the service, consumed only by the store.
#[derive(Clone, Debug)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}
