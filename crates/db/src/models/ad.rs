//! Ad entity model, DTOs and list filter.

use classifieds_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ads` table joined with its author's username and its
/// category's name.
///
/// `image` holds the path relative to the media root; the API turns it
/// into a public URL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ad {
    pub id: DbId,
    pub author_id: DbId,
    pub author: String,
    pub name: String,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub is_published: bool,
    pub image: Option<String>,
    pub category_id: DbId,
    pub category: String,
}

/// DTO for creating a new ad.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAd {
    pub name: String,
    pub author_id: DbId,
    pub price: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    pub category_id: DbId,
}

/// DTO for updating an ad.
///
/// Every field is written as given, so an absent key clears the column
/// (and fails for the non-nullable ones).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAd {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub is_published: Option<bool>,
    pub category_id: Option<DbId>,
}

/// Optional filters for the ad list. All present filters must match.
#[derive(Debug, Clone, Default)]
pub struct AdFilter {
    pub category_id: Option<DbId>,
    /// Case-insensitive substring of the ad name.
    pub text: Option<String>,
    /// Inclusive lower price bound.
    pub price_from: Option<i32>,
    /// Inclusive upper price bound.
    pub price_to: Option<i32>,
    pub is_published: Option<bool>,
}
