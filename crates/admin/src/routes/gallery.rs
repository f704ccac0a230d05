//! Gallery management route handlers.
//!
//! Bulk uploads run concurrently, one task per file, and the page
//! reports per-file outcomes: a failure in the middle of a batch does
//! not hide which files made it. Nothing is rolled back - the listing
//! refresh after the batch shows exactly the rows that were inserted.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tokio::task::JoinSet;
use tracing::instrument;

use arcline_core::{GalleryPhoto, NewGalleryPhoto, seed};
use arcline_store::StoreClient;

use crate::editor::{self, UploadedFile};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Storage namespace for gallery photos.
const GALLERY_NAMESPACE: &str = "gallery";

/// Per-file outcome of a bulk upload.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// File names stored and recorded.
    pub succeeded: Vec<String>,
    /// File names that failed, with the error shown to the operator.
    pub failed: Vec<(String, String)>,
}

impl BatchReport {
    fn from_results(results: Vec<(String, std::result::Result<String, String>)>) -> Self {
        let mut report = Self::default();
        for (name, outcome) in results {
            match outcome {
                Ok(_) => report.succeeded.push(name),
                Err(error) => report.failed.push((name, error)),
            }
        }
        report
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Gallery page template.
#[derive(Template, WebTemplate)]
#[template(path = "gallery/index.html")]
pub struct GalleryTemplate {
    pub photos: Vec<GalleryPhoto>,
    /// Present right after a bulk upload.
    pub report: Option<BatchReport>,
    pub error: Option<String>,
    /// The one-shot seeding action is offered only for an empty gallery.
    pub can_seed: bool,
}

async fn listing(store: &StoreClient) -> (Vec<GalleryPhoto>, Option<String>) {
    match store.list_gallery().await {
        Ok(photos) => (photos, None),
        Err(error) => {
            tracing::error!(error = %error, "failed to list gallery");
            (Vec::new(), Some("Could not load the gallery.".to_string()))
        }
    }
}

/// Render the gallery listing.
///
/// GET /gallery
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> GalleryTemplate {
    let store = state.store().authenticated(&admin.access_token);
    let (photos, error) = listing(&store).await;

    GalleryTemplate {
        can_seed: photos.is_empty() && error.is_none(),
        photos,
        report: None,
        error,
    }
}

/// One upload unit: store the blob, then record the row. Units are
/// independent; an earlier success is never undone by a later failure.
async fn upload_one(store: &StoreClient, file: UploadedFile) -> std::result::Result<String, String> {
    let url = store
        .upload_image(
            GALLERY_NAMESPACE,
            &file.filename,
            file.bytes,
            &file.content_type,
        )
        .await
        .map_err(|e| e.to_string())?;

    store
        .insert_gallery_photo(&NewGalleryPhoto { url: url.clone() })
        .await
        .map_err(|e| e.to_string())?;

    Ok(url)
}

/// Bulk upload: all files concurrently, listing refreshed only after
/// every unit has settled.
///
/// POST /gallery/upload
#[instrument(skip(admin, state, multipart))]
pub async fn upload(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<GalleryTemplate> {
    let store = state.store().authenticated(&admin.access_token);
    let (files, _fields) = editor::read_multipart(&mut multipart).await?;

    if files.is_empty() {
        let (photos, error) = listing(&store).await;
        return Ok(GalleryTemplate {
            can_seed: photos.is_empty() && error.is_none(),
            photos,
            report: None,
            error: error.or_else(|| Some("Choose at least one file.".to_string())),
        });
    }

    let mut tasks = JoinSet::new();
    for file in files {
        let store = store.clone();
        tasks.spawn(async move {
            let name = file.filename.clone();
            let outcome = upload_one(&store, file).await;
            (name, outcome)
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(result) => results.push(result),
            Err(error) => results.push(("(upload task)".to_string(), Err(error.to_string()))),
        }
    }

    let report = BatchReport::from_results(results);
    if report.has_failures() {
        tracing::warn!(
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "gallery batch finished with failures"
        );
    }

    let (photos, error) = listing(&store).await;
    Ok(GalleryTemplate {
        can_seed: false,
        photos,
        report: Some(report),
        error,
    })
}

/// Insert the bundled photo list in one call.
///
/// POST /gallery/seed
#[instrument(skip(admin, state))]
pub async fn seed_photos(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Redirect> {
    let rows: Vec<NewGalleryPhoto> = seed::INITIAL_GALLERY_PATHS
        .iter()
        .map(|path| NewGalleryPhoto {
            url: (*path).to_string(),
        })
        .collect();

    state
        .store()
        .authenticated(&admin.access_token)
        .insert_gallery_photos(&rows)
        .await?;

    Ok(Redirect::to("/gallery"))
}

/// Delete form carries the photo's address so the handler can decide
/// whether the blob is ours to clean up.
#[derive(Debug, Deserialize)]
pub struct DeletePhotoForm {
    pub url: String,
}

/// Delete a photo row, then best-effort remove the blob - but only when
/// the address lies inside the managed gallery namespace. Seeded
/// relative paths and foreign hosts are left alone.
///
/// POST /gallery/{id}/delete
#[instrument(skip(admin, state, form))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DeletePhotoForm>,
) -> Result<Redirect> {
    let store = state.store().authenticated(&admin.access_token);

    store.delete_gallery_photo(id).await?;

    if let Some(path) = store.object_path_from_public_url(&form.url)
        && path.starts_with(GALLERY_NAMESPACE)
        && let Err(error) = store.remove_objects(&[path]).await
    {
        tracing::warn!(error = %error, "blob cleanup failed; row already deleted");
    }

    Ok(Redirect::to("/gallery"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_report_separates_outcomes() {
        let report = BatchReport::from_results(vec![
            ("a.jpg".to_string(), Ok("https://cdn/a.jpg".to_string())),
            ("b.jpg".to_string(), Err("quota exceeded".to_string())),
            ("c.jpg".to_string(), Ok("https://cdn/c.jpg".to_string())),
        ]);

        assert_eq!(report.succeeded, vec!["a.jpg", "c.jpg"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "b.jpg");
        assert!(report.has_failures());
    }

    #[test]
    fn clean_batch_has_no_failures() {
        let report =
            BatchReport::from_results(vec![("a.jpg".to_string(), Ok("url".to_string()))]);
        assert!(!report.has_failures());
        assert_eq!(report.succeeded.len(), 1);
    }
}
