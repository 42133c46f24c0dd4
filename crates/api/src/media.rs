//! Storage of uploaded ad images under the media root.
//!
//! Files are written to `{media_root}/ads/` and the database keeps the path
//! relative to the media root (`ads/ad_7_1700000000.jpg`). The public URL is
//! that path under the configured media URL prefix.

use std::path::Path;

use classifieds_core::types::DbId;

/// Image extensions accepted by the upload endpoint (lowercase).
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Subdirectory of the media root that holds ad images.
pub const AD_IMAGE_DIR: &str = "ads";

/// Lowercased extension of `filename` if it is a supported image type.
pub fn image_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_lowercase();
    SUPPORTED_IMAGE_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

/// Path of an ad image relative to the media root.
pub fn ad_image_path(ad_id: DbId, timestamp: i64, ext: &str) -> String {
    format!("{AD_IMAGE_DIR}/ad_{ad_id}_{timestamp}.{ext}")
}

/// Public URL of a stored file.
pub fn public_url(media_url: &str, relative_path: &str) -> String {
    format!("{media_url}/{relative_path}")
}

/// Write `data` to `relative_path` under `media_root`, creating directories
/// as needed.
pub async fn store(media_root: &Path, relative_path: &str, data: &[u8]) -> std::io::Result<()> {
    let file_path = media_root.join(relative_path);
    if let Some(parent) = file_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&file_path, data).await?;
    tracing::debug!(path = %file_path.display(), bytes = data.len(), "Stored media file");
    Ok(())
}

/// Remove a stored file. Failures are logged, not returned.
pub async fn discard(media_root: &Path, relative_path: &str) {
    let file_path = media_root.join(relative_path);
    if let Err(e) = tokio::fs::remove_file(&file_path).await {
        tracing::warn!(path = %file_path.display(), error = %e, "Failed to remove media file");
    }
}
