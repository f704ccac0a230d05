//! Row API client for the hosted backend.
//!
//! Typed per-table methods layered over a small set of PostgREST-style
//! request helpers. "Get by id" fetches with `limit=1` and maps an empty
//! result to [`StoreError::NotFound`]; inserts and updates ask the
//! backend to return the written representation.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use arcline_core::{
    AdminProfile, Brand, CatalogItem, ContactSettings, GalleryPhoto, HeroSettings, NewBrand,
    NewCatalogItem, NewGalleryPhoto, SettingKey, SiteSetting,
};

use crate::config::StoreConfig;
use crate::error::{StoreError, extract_message};

/// Table names consumed by this application.
pub mod tables {
    pub const PRODUCTS: &str = "products";
    pub const BRANDS: &str = "brands";
    pub const GALLERY: &str = "gallery";
    pub const SITE_SETTINGS: &str = "site_settings";
    pub const PROFILES: &str = "profiles";
}

/// Client for the hosted backend.
///
/// Cheaply cloneable via `Arc`. The default bearer is the anon key;
/// [`StoreClient::authenticated`] derives a client that acts as a
/// signed-in operator.
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<StoreClientInner>,
}

struct StoreClientInner {
    http: reqwest::Client,
    base: Url,
    api_key: String,
    bearer: String,
}

/// A `site_settings` row on the wire.
#[derive(Debug, Serialize, serde::Deserialize)]
struct SettingRow {
    key: String,
    value: serde_json::Value,
    updated_at: Option<chrono::DateTime<Utc>>,
}

impl StoreClient {
    /// Create a new client using the anon key as bearer.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let base = Url::parse(&config.api_url).map_err(|e| StoreError::Api {
            status: 0,
            message: format!("invalid STORE_API_URL: {e}"),
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(StoreClientInner {
                http,
                base,
                api_key: config.anon_key.clone(),
                bearer: config.anon_key.clone(),
            }),
        })
    }

    /// Derive a client whose requests carry an operator's access token.
    #[must_use]
    pub fn authenticated(&self, access_token: &str) -> Self {
        Self {
            inner: Arc::new(StoreClientInner {
                http: self.inner.http.clone(),
                base: self.inner.base.clone(),
                api_key: self.inner.api_key.clone(),
                bearer: access_token.to_string(),
            }),
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.inner.api_key
    }

    pub(crate) fn bearer(&self) -> &str {
        &self.inner.bearer
    }

    /// Build an endpoint URL under the base.
    ///
    /// # Panics
    ///
    /// Never in practice: the base URL was validated in `new` and the
    /// segments are compile-time table and API names.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.inner.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .expect("store base URL cannot be a base");
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        url
    }

    fn rest_url(&self, table: &str) -> Url {
        self.endpoint(&["rest", "v1", table])
    }

    /// Read a response, mapping non-success statuses to `StoreError::Api`
    /// with the backend's message.
    pub(crate) async fn read_body(response: reqwest::Response) -> Result<String, StoreError> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(StoreError::Api {
                status: status.as_u16(),
                message: extract_message(status.as_u16(), &body),
            })
        }
    }

    // =========================================================================
    // Generic row helpers
    // =========================================================================

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .inner
            .http
            .get(self.rest_url(table))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.bearer)
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: (&str, &str),
    ) -> Result<T, StoreError> {
        let mut rows: Vec<T> = self.select(table, &[filter, ("limit", "1")]).await?;
        match rows.pop() {
            Some(row) => Ok(row),
            None => {
                debug!(table, filter = filter.1, "single-row lookup matched nothing");
                Err(StoreError::NotFound)
            }
        }
    }

    async fn insert_returning<P: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        payload: &P,
    ) -> Result<T, StoreError> {
        let response = self
            .inner
            .http
            .post(self.rest_url(table))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.bearer)
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        let mut rows: Vec<T> = serde_json::from_str(&body)?;
        rows.pop().ok_or(StoreError::NotFound)
    }

    async fn update_returning<P: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        id: i64,
        payload: &P,
    ) -> Result<T, StoreError> {
        let id_filter = format!("eq.{id}");
        let response = self
            .inner
            .http
            .patch(self.rest_url(table))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.bearer)
            .header("Prefer", "return=representation")
            .query(&[("id", id_filter.as_str())])
            .json(payload)
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        let mut rows: Vec<T> = serde_json::from_str(&body)?;
        rows.pop().ok_or(StoreError::NotFound)
    }

    async fn delete_by_id(&self, table: &str, id: i64) -> Result<(), StoreError> {
        let id_filter = format!("eq.{id}");
        let response = self
            .inner
            .http
            .delete(self.rest_url(table))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.bearer)
            .query(&[("id", id_filter.as_str())])
            .send()
            .await?;

        Self::read_body(response).await?;
        Ok(())
    }

    async fn upsert<P: Serialize + ?Sized>(
        &self,
        table: &str,
        on_conflict: &str,
        payload: &P,
    ) -> Result<(), StoreError> {
        let response = self
            .inner
            .http
            .post(self.rest_url(table))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.bearer)
            .header("Prefer", "resolution=merge-duplicates")
            .query(&[("on_conflict", on_conflict)])
            .json(payload)
            .send()
            .await?;

        Self::read_body(response).await?;
        Ok(())
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// List catalog items, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<CatalogItem>, StoreError> {
        self.select(tables::PRODUCTS, &[("order", "created_at.desc")])
            .await
    }

    /// Get a single catalog item by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row matches.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> Result<CatalogItem, StoreError> {
        let id_filter = format!("eq.{id}");
        self.select_one(tables::PRODUCTS, ("id", id_filter.as_str())).await
    }

    /// Insert a new catalog item, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the backend's message is
    /// preserved for the operator.
    #[instrument(skip(self, item), fields(name = %item.name))]
    pub async fn insert_product(&self, item: &NewCatalogItem) -> Result<CatalogItem, StoreError> {
        self.insert_returning(tables::PRODUCTS, item).await
    }

    /// Replace an existing catalog item by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row matches.
    #[instrument(skip(self, item), fields(name = %item.name))]
    pub async fn update_product(
        &self,
        id: i64,
        item: &NewCatalogItem,
    ) -> Result<CatalogItem, StoreError> {
        self.update_returning(tables::PRODUCTS, id, item).await
    }

    /// Delete a catalog item by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<(), StoreError> {
        self.delete_by_id(tables::PRODUCTS, id).await
    }

    // =========================================================================
    // Brands
    // =========================================================================

    /// List brands, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn list_brands(&self) -> Result<Vec<Brand>, StoreError> {
        self.select(tables::BRANDS, &[("order", "name.asc")]).await
    }

    /// Get a single brand by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row matches.
    #[instrument(skip(self))]
    pub async fn get_brand(&self, id: i64) -> Result<Brand, StoreError> {
        let id_filter = format!("eq.{id}");
        self.select_one(tables::BRANDS, ("id", id_filter.as_str())).await
    }

    /// Insert a new brand, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, brand), fields(name = %brand.name))]
    pub async fn insert_brand(&self, brand: &NewBrand) -> Result<Brand, StoreError> {
        self.insert_returning(tables::BRANDS, brand).await
    }

    /// Replace an existing brand by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row matches.
    #[instrument(skip(self, brand), fields(name = %brand.name))]
    pub async fn update_brand(&self, id: i64, brand: &NewBrand) -> Result<Brand, StoreError> {
        self.update_returning(tables::BRANDS, id, brand).await
    }

    /// Delete a brand by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_brand(&self, id: i64) -> Result<(), StoreError> {
        self.delete_by_id(tables::BRANDS, id).await
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    /// List gallery photos, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn list_gallery(&self) -> Result<Vec<GalleryPhoto>, StoreError> {
        self.select(tables::GALLERY, &[("order", "created_at.desc")])
            .await
    }

    /// Insert one gallery photo, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(url = %photo.url))]
    pub async fn insert_gallery_photo(
        &self,
        photo: &NewGalleryPhoto,
    ) -> Result<GalleryPhoto, StoreError> {
        self.insert_returning(tables::GALLERY, photo).await
    }

    /// Insert a batch of gallery photos in one call (seeding).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, photos), fields(count = photos.len()))]
    pub async fn insert_gallery_photos(
        &self,
        photos: &[NewGalleryPhoto],
    ) -> Result<(), StoreError> {
        let response = self
            .inner
            .http
            .post(self.rest_url(tables::GALLERY))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.bearer)
            .json(photos)
            .send()
            .await?;

        Self::read_body(response).await?;
        Ok(())
    }

    /// Delete a gallery photo row by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_gallery_photo(&self, id: i64) -> Result<(), StoreError> {
        self.delete_by_id(tables::GALLERY, id).await
    }

    // =========================================================================
    // Site settings
    // =========================================================================

    /// Fetch a settings document by key. `Ok(None)` means the row does
    /// not exist yet (a fresh environment), which callers treat the same
    /// as any other read failure: keep the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_setting_document(
        &self,
        key: SettingKey,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        let key_filter = format!("eq.{key}");
        match self
            .select_one::<SettingRow>(tables::SITE_SETTINGS, ("key", key_filter.as_str()))
            .await
        {
            Ok(row) => Ok(Some(row.value)),
            Err(StoreError::NotFound) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Fetch and decode the hero document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the document has drifted
    /// from the expected shape.
    pub async fn hero_settings(&self) -> Result<Option<HeroSettings>, StoreError> {
        match self.get_setting_document(SettingKey::Hero).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Fetch and decode the contact document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the document has drifted
    /// from the expected shape.
    pub async fn contact_settings(&self) -> Result<Option<ContactSettings>, StoreError> {
        match self.get_setting_document(SettingKey::Contact).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Upsert a settings row as a whole document (never a partial patch).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, setting), fields(key = %setting.key()))]
    pub async fn upsert_setting(&self, setting: &SiteSetting) -> Result<(), StoreError> {
        let row = SettingRow {
            key: setting.key().as_str().to_string(),
            value: setting.value_document()?,
            updated_at: Some(Utc::now()),
        };
        self.upsert(tables::SITE_SETTINGS, "key", &row).await
    }

    // =========================================================================
    // Profiles
    // =========================================================================

    /// List operator profiles.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn list_profiles(&self) -> Result<Vec<AdminProfile>, StoreError> {
        self.select(tables::PROFILES, &[("order", "email.asc")])
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
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
    fn endpoint_builds_nested_paths() {
        let client = test_client();
        assert_eq!(
            client.endpoint(&["rest", "v1", "products"]).as_str(),
            "https://project.example.co/rest/v1/products"
        );
        assert_eq!(
            client
                .endpoint(&["storage", "v1", "object", "media", "products", "a.png"])
                .as_str(),
            "https://project.example.co/storage/v1/object/media/products/a.png"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = StoreClient::new(&StoreConfig {
            api_url: "not a url".to_string(),
            anon_key: "anon-key".to_string(),
            service_key: None,
            timeout: Duration::from_secs(10),
        });
        assert!(result.is_err());
    }

    #[test]
    fn authenticated_swaps_only_the_bearer() {
        let client = test_client();
        let signed_in = client.authenticated("operator-token");
        assert_eq!(signed_in.bearer(), "operator-token");
        assert_eq!(signed_in.api_key(), "anon-key");
        assert_eq!(client.bearer(), "anon-key");
    }
}
