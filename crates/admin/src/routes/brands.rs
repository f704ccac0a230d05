//! Brand editor route handlers.
//!
//! Same editor shape as products with a simpler schema, so the form can
//! use plain serde extraction (no repeated fields).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use arcline_core::{Brand, NewBrand};

use crate::editor::{self, ImageFieldTemplate};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// List view the editor navigates back to on success.
const BRANDS_LIST: &str = "/dashboard?tab=brands";

/// Storage namespace for brand logos.
const BRANDS_NAMESPACE: &str = "brands";

/// Brand form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandFormData {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub logo_url: String,
}

impl BrandFormData {
    fn from_brand(brand: Brand) -> Self {
        Self {
            name: brand.name,
            url: brand.url,
            logo_url: brand.logo_url.unwrap_or_default(),
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        Ok(())
    }

    fn into_row(self) -> NewBrand {
        NewBrand {
            name: self.name,
            url: self.url,
            logo_url: if self.logo_url.trim().is_empty() {
                None
            } else {
                Some(self.logo_url)
            },
        }
    }
}

/// Brand form template (create and edit).
///
/// `field_name`/`upload_url`/`current`/`upload_error` feed the shared
/// image-field fragment included in the form markup.
#[derive(Template, WebTemplate)]
#[template(path = "brands/form.html")]
pub struct BrandFormTemplate {
    pub id: Option<i64>,
    pub form: BrandFormData,
    pub error: Option<String>,
    pub field_name: &'static str,
    pub upload_url: &'static str,
    pub current: String,
    pub upload_error: Option<String>,
}

impl BrandFormTemplate {
    fn build(id: Option<i64>, form: BrandFormData, error: Option<String>) -> Self {
        Self {
            id,
            current: form.logo_url.clone(),
            form,
            error,
            field_name: "logo_url",
            upload_url: "/brands/upload",
            upload_error: None,
        }
    }
}

/// Render the blank form.
///
/// GET /brands/new
pub async fn new_form(RequireAdminAuth(_admin): RequireAdminAuth) -> BrandFormTemplate {
    BrandFormTemplate::build(None, BrandFormData::default(), None)
}

/// Render the form prefilled from an existing row.
///
/// GET /brands/{id}/edit
#[instrument(skip(admin, state))]
pub async fn edit_form(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<BrandFormTemplate> {
    let brand = state
        .store()
        .authenticated(&admin.access_token)
        .get_brand(id)
        .await?;

    Ok(BrandFormTemplate::build(
        Some(id),
        BrandFormData::from_brand(brand),
        None,
    ))
}

/// Create a new brand.
///
/// POST /brands
#[instrument(skip(admin, state, form))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<BrandFormData>,
) -> Response {
    submit(&state, &admin.access_token, None, form).await
}

/// Update an existing brand.
///
/// POST /brands/{id}
#[instrument(skip(admin, state, form))]
pub async fn update(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<BrandFormData>,
) -> Response {
    submit(&state, &admin.access_token, Some(id), form).await
}

/// Shared submit path: one insert or one update, never both.
async fn submit(
    state: &AppState,
    access_token: &str,
    id: Option<i64>,
    form: BrandFormData,
) -> Response {
    if let Err(message) = form.validate() {
        return BrandFormTemplate::build(id, form, Some(message)).into_response();
    }

    let store = state.store().authenticated(access_token);
    let row = form.clone().into_row();

    let outcome = match id {
        None => store.insert_brand(&row).await.map(|_| ()),
        Some(id) => store.update_brand(id, &row).await.map(|_| ()),
    };

    match outcome {
        Ok(()) => Redirect::to(BRANDS_LIST).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "brand save failed");
            BrandFormTemplate::build(id, form, Some(format!("Could not save: {error}")))
                .into_response()
        }
    }
}

/// Logo upload fragment for the brand form.
///
/// POST /brands/upload
pub async fn upload_logo(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    multipart: Multipart,
) -> ImageFieldTemplate {
    editor::handle_image_upload(
        &state.store().authenticated(&admin.access_token),
        BRANDS_NAMESPACE,
        "logo_url",
        "/brands/upload",
        multipart,
    )
    .await
}

/// Delete a brand.
///
/// POST /brands/{id}/delete
#[instrument(skip(admin, state))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    state
        .store()
        .authenticated(&admin.access_token)
        .delete_brand(id)
        .await?;

    Ok(Redirect::to(BRANDS_LIST))
}
