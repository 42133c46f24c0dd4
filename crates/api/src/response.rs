//! Shared response types for API handlers.
//!
//! List endpoints answer with [`PageResponse`]; deletes acknowledge with
//! [`StatusResponse`]. Ads get a dedicated shape because the stored image
//! path is turned into a public URL.

use classifieds_core::types::DbId;
use classifieds_db::models::ad::Ad;
use serde::Serialize;

pub use classifieds_core::pagination::PageResponse;

use crate::media;

/// `{ "status": "..." }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    /// The acknowledgement returned by every successful delete.
    pub fn ok() -> Self {
        Self { status: "OK" }
    }
}

/// An ad as returned by the API.
#[derive(Debug, Serialize)]
pub struct AdResponse {
    pub id: DbId,
    pub author_id: DbId,
    pub author: String,
    pub name: String,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub is_published: bool,
    /// Public URL of the image, or null when none was uploaded.
    pub image: Option<String>,
    pub category_id: DbId,
    pub category: String,
}

impl AdResponse {
    pub fn from_ad(ad: Ad, media_url: &str) -> Self {
        Self {
            id: ad.id,
            author_id: ad.author_id,
            author: ad.author,
            name: ad.name,
            price: ad.price,
            description: ad.description,
            is_published: ad.is_published,
            image: ad.image.map(|path| media::public_url(media_url, &path)),
            category_id: ad.category_id,
            category: ad.category,
        }
    }
}
