//! Location entity model and DTOs.

use classifieds_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLocation {
    pub name: Option<String>,
}
