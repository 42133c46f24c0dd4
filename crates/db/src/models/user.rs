//! User entity model and DTOs.

use classifieds_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role assigned when a user is created without one.
pub const DEFAULT_ROLE: &str = "member";

/// A row from the `users` table joined with its location name.
///
/// `password` is loaded but never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub age: Option<i32>,
    pub location_id: Option<DbId>,
    /// Name of the referenced location, if any.
    pub location: Option<String>,
}

/// A user as shown on the paginated list, with the number of published ads.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub user: User,
    pub ads_published: i64,
}

/// DTO for creating a new user.
///
/// `location` is a location *name*; it is resolved with get-or-create.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Defaults to [`DEFAULT_ROLE`] if omitted.
    pub role: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub location: Option<String>,
}

/// DTO for updating a user.
///
/// Every field is written as given: an absent key clears the column.
/// `username` and `role` cannot be changed through this DTO.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub location: Option<String>,
}
