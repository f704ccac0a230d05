//! Shared record-editor mechanics.
//!
//! Both entity forms (products, brands) use the same attach-file flow:
//! a small upload fragment posts the chosen file plus the field's
//! current value; the handler stores the blob under the entity's
//! namespace and swaps the fragment with the new public address. On
//! failure the fragment comes back with the previous value untouched
//! and the error alongside it.
//!
//! An upload is deliberately independent of the record submit: a blob
//! whose form is abandoned stays in storage unreferenced, which is a
//! cleanup gap, not a correctness problem.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Multipart;

use arcline_store::StoreClient;

use crate::error::AppError;

/// One file pulled out of a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Read a multipart form: every file field in order, plus the text
/// fields.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the multipart stream is malformed.
pub async fn read_multipart(
    multipart: &mut Multipart,
) -> Result<(Vec<UploadedFile>, BTreeMap<String, String>), AppError> {
    let mut files = Vec::new();
    let mut fields = BTreeMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if let Some(filename) = field.file_name().map(str::to_string) {
            // An empty filename is the browser's "no file chosen"
            if filename.is_empty() {
                continue;
            }
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?
                .to_vec();
            files.push(UploadedFile {
                filename,
                content_type,
                bytes,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            fields.insert(name, value);
        }
    }

    Ok((files, fields))
}

/// The image-field fragment swapped by the upload endpoints.
///
/// The entity forms embed the same markup via `{% include %}`, so their
/// template structs carry these fields under the same names.
#[derive(Template, WebTemplate)]
#[template(path = "editor/image_field.html")]
pub struct ImageFieldTemplate {
    /// Form field the address is submitted under (`image_url`/`logo_url`).
    pub field_name: &'static str,
    /// Endpoint the fragment posts files to.
    pub upload_url: &'static str,
    /// Current public address; empty when none.
    pub current: String,
    pub upload_error: Option<String>,
}

/// Handle an image upload for an entity form.
///
/// Stores the blob under `namespace/` with a randomized name and
/// returns the fragment carrying the new address; any failure returns
/// the fragment with the previous address and the error message.
pub async fn handle_image_upload(
    store: &StoreClient,
    namespace: &str,
    field_name: &'static str,
    upload_url: &'static str,
    mut multipart: Multipart,
) -> ImageFieldTemplate {
    let (files, fields) = match read_multipart(&mut multipart).await {
        Ok(parsed) => parsed,
        Err(error) => {
            return ImageFieldTemplate {
                field_name,
                upload_url,
                current: String::new(),
                upload_error: Some(error.to_string()),
            };
        }
    };

    let current = fields.get(field_name).cloned().unwrap_or_default();

    let Some(file) = files.into_iter().next() else {
        return ImageFieldTemplate {
            field_name,
            upload_url,
            current,
            upload_error: Some("Choose a file to upload".to_string()),
        };
    };

    match store
        .upload_image(namespace, &file.filename, file.bytes, &file.content_type)
        .await
    {
        Ok(url) => ImageFieldTemplate {
            field_name,
            upload_url,
            current: url,
            upload_error: None,
        },
        Err(error) => {
            tracing::error!(namespace, error = %error, "image upload failed");
            ImageFieldTemplate {
                field_name,
                upload_url,
                current,
                upload_error: Some(format!("Upload failed: {error}")),
            }
        }
    }
}
