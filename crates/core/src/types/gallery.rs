//! Workshop gallery photo types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A gallery photo row. Default ordering is newest first, by creation
/// timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryPhoto {
    pub id: i64,
    /// Absolute URL into the managed storage bucket, or a path relative
    /// to the local static asset prefix (seeded photos).
    pub url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for a gallery photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGalleryPhoto {
    pub url: String,
}
