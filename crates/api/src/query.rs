//! Shared query parameter types for API handlers.

use classifieds_core::types::DbId;
use classifieds_db::models::ad::AdFilter;
use serde::Deserialize;

/// Page-number pagination (`?page=`).
///
/// `page` is kept as a raw string: non-numeric values fall back to the
/// first page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// Query parameters for the ad list: pagination plus optional filters.
#[derive(Debug, Default, Deserialize)]
pub struct AdListParams {
    pub page: Option<String>,
    /// Category id.
    pub cat: Option<DbId>,
    /// Case-insensitive substring of the ad name.
    pub text: Option<String>,
    pub price_from: Option<i32>,
    pub price_to: Option<i32>,
    pub is_published: Option<bool>,
}

impl AdListParams {
    /// Extract the repository filter. Blank `text` is ignored.
    pub fn filter(&self) -> AdFilter {
        AdFilter {
            category_id: self.cat,
            text: self
                .text
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            price_from: self.price_from,
            price_to: self.price_to,
            is_published: self.is_published,
        }
    }
}
