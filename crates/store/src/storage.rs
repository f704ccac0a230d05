//! Blob storage API.
//!
//! One public bucket (`media`) holds every uploaded image, namespaced
//! per entity (`products/`, `brands/`, `gallery/`). Object names are
//! randomized but keep the original extension, so concurrent uploads of
//! `logo.png` never collide.

use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::instrument;

use crate::client::StoreClient;
use crate::error::StoreError;

/// The single public bucket used for all images.
pub const MEDIA_BUCKET: &str = "media";

/// Length of the randomized object-name stem.
const OBJECT_STEM_LEN: usize = 16;

/// Build a randomized, extension-preserving object name for an upload.
#[must_use]
pub fn randomized_object_name(original: &str) -> String {
    let stem: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(OBJECT_STEM_LEN)
        .map(char::from)
        .collect();
    let stem = stem.to_lowercase();

    match original.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => format!("{stem}.{extension}"),
        _ => stem,
    }
}

impl StoreClient {
    /// Upload raw bytes to a path inside the media bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// object (quota, policy).
    #[instrument(skip(self, bytes), fields(path = %path, size = bytes.len()))]
    pub async fn upload_object(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        let mut segments = vec!["storage", "v1", "object", MEDIA_BUCKET];
        segments.extend(path.split('/'));

        let response = self
            .http()
            .post(self.endpoint(&segments))
            .header("apikey", self.api_key())
            .bearer_auth(self.bearer())
            .header("Content-Type", content_type.to_string())
            .body(bytes)
            .send()
            .await?;

        Self::read_body(response).await?;
        Ok(())
    }

    /// Public address of an object inside the media bucket.
    #[must_use]
    pub fn public_object_url(&self, path: &str) -> String {
        let mut segments = vec!["storage", "v1", "object", "public", MEDIA_BUCKET];
        segments.extend(path.split('/'));
        self.endpoint(&segments).to_string()
    }

    /// If a URL points into this project's media bucket, return the
    /// object path; anything else (seeded relative paths, foreign hosts)
    /// is not ours to delete.
    #[must_use]
    pub fn object_path_from_public_url(&self, url: &str) -> Option<String> {
        let prefix = self.public_object_url("");
        url.strip_prefix(prefix.as_str())
            .filter(|path| !path.is_empty())
            .map(str::to_string)
    }

    /// Remove objects from the media bucket (best-effort cleanup).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; callers deleting rows
    /// treat this as non-fatal.
    #[instrument(skip(self), fields(count = paths.len()))]
    pub async fn remove_objects(&self, paths: &[String]) -> Result<(), StoreError> {
        let response = self
            .http()
            .delete(self.endpoint(&["storage", "v1", "object", MEDIA_BUCKET]))
            .header("apikey", self.api_key())
            .bearer_auth(self.bearer())
            .json(&serde_json::json!({ "prefixes": paths }))
            .send()
            .await?;

        Self::read_body(response).await?;
        Ok(())
    }

    /// Upload an image under an entity namespace and return its public
    /// address. This is the whole attach-file flow: randomize the name,
    /// store the blob, derive the URL the form will submit.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails; the caller keeps whatever
    /// address the form previously held.
    pub async fn upload_image(
        &self,
        namespace: &str,
        original_filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError> {
        let path = format!("{namespace}/{}", randomized_object_name(original_filename));
        self.upload_object(&path, bytes, content_type).await?;
        Ok(self.public_object_url(&path))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use std::time::Duration;

    fn test_client() -> StoreClient {
        StoreClient::new(&StoreConfig {
            api_url: "https://project.example.co".to_string(),
            anon_key: "anon-key".to_string(),
            service_key: None,
            timeout: Duration::from_secs(10),
        })
        .unwrap()
    }

    #[test]
    fn randomized_names_preserve_extension() {
        let name = randomized_object_name("logo.PNG");
        assert!(name.ends_with(".PNG"));
        assert_eq!(name.len(), OBJECT_STEM_LEN + 4);

        let bare = randomized_object_name("noext");
        assert_eq!(bare.len(), OBJECT_STEM_LEN);
    }

    #[test]
    fn randomized_names_do_not_collide() {
        let a = randomized_object_name("a.jpg");
        let b = randomized_object_name("a.jpg");
        assert_ne!(a, b);
    }

    #[test]
    fn public_url_round_trips_to_object_path() {
        let client = test_client();
        let url = client.public_object_url("gallery/abc123.webp");
        assert_eq!(
            url,
            "https://project.example.co/storage/v1/object/public/media/gallery/abc123.webp"
        );
        assert_eq!(
            client.object_path_from_public_url(&url).unwrap(),
            "gallery/abc123.webp"
        );
    }

    #[test]
    fn foreign_urls_are_not_ours() {
        let client = test_client();
        assert!(client.object_path_from_public_url("/static/images/workshop/team.jpg").is_none());
        assert!(
            client
                .object_path_from_public_url("https://other.example.co/storage/v1/object/public/media/x.jpg")
                .is_none()
        );
    }
}
