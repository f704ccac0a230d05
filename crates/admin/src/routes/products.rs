//! Product editor route handlers.
//!
//! The create and edit forms share one template and one submit path:
//! no id means exactly one insert, an id means exactly one update
//! scoped to that id (full replace). A rejected submit re-renders the
//! form with the backend's message and everything the operator typed.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, RawForm, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::editor::{self, ImageFieldTemplate};
use crate::error::Result;
use crate::filters;
use crate::forms::{PRODUCT_CATEGORIES, ProductFormData};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// List view the editor navigates back to on success.
const PRODUCTS_LIST: &str = "/dashboard?tab=products";

/// Storage namespace for product images.
const PRODUCTS_NAMESPACE: &str = "products";

/// Product form template (create and edit).
///
/// `field_name`/`upload_url`/`current`/`upload_error` feed the shared
/// image-field fragment included in the form markup.
#[derive(Template, WebTemplate)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    /// Present when editing an existing row.
    pub id: Option<i64>,
    pub form: ProductFormData,
    pub categories: &'static [&'static str],
    pub error: Option<String>,
    pub field_name: &'static str,
    pub upload_url: &'static str,
    pub current: String,
    pub upload_error: Option<String>,
}

impl ProductFormTemplate {
    fn build(id: Option<i64>, form: ProductFormData, error: Option<String>) -> Self {
        Self {
            id,
            current: form.image_url.clone(),
            form,
            categories: PRODUCT_CATEGORIES,
            error,
            field_name: "image_url",
            upload_url: "/products/upload",
            upload_error: None,
        }
    }
}

/// Render the blank form.
///
/// GET /products/new
pub async fn new_form(RequireAdminAuth(_admin): RequireAdminAuth) -> ProductFormTemplate {
    ProductFormTemplate::build(None, ProductFormData::default(), None)
}

/// Render the form prefilled from an existing row.
///
/// GET /products/{id}/edit
///
/// A failed lookup propagates as an error response - the editor never
/// sits in a loading state that cannot resolve.
#[instrument(skip(admin, state))]
pub async fn edit_form(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ProductFormTemplate> {
    let item = state
        .store()
        .authenticated(&admin.access_token)
        .get_product(id)
        .await?;

    Ok(ProductFormTemplate::build(
        Some(id),
        ProductFormData::from_item(item),
        None,
    ))
}

/// Create a new product.
///
/// POST /products
#[instrument(skip(admin, state, body))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Response {
    submit(&state, &admin.access_token, None, &body).await
}

/// Update an existing product.
///
/// POST /products/{id}
#[instrument(skip(admin, state, body))]
pub async fn update(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RawForm(body): RawForm,
) -> Response {
    submit(&state, &admin.access_token, Some(id), &body).await
}

/// Shared submit path: one insert or one update, never both.
async fn submit(state: &AppState, access_token: &str, id: Option<i64>, body: &[u8]) -> Response {
    let form = ProductFormData::from_urlencoded(body);

    if let Err(message) = form.validate() {
        return ProductFormTemplate::build(id, form, Some(message)).into_response();
    }

    let store = state.store().authenticated(access_token);
    let row = form.clone().into_row();

    let outcome = match id {
        None => store.insert_product(&row).await.map(|_| ()),
        Some(id) => store.update_product(id, &row).await.map(|_| ()),
    };

    match outcome {
        Ok(()) => Redirect::to(PRODUCTS_LIST).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "product save failed");
            ProductFormTemplate::build(id, form, Some(format!("Could not save: {error}")))
                .into_response()
        }
    }
}

/// Image upload fragment for the product form.
///
/// POST /products/upload
pub async fn upload_image(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    multipart: Multipart,
) -> ImageFieldTemplate {
    editor::handle_image_upload(
        &state.store().authenticated(&admin.access_token),
        PRODUCTS_NAMESPACE,
        "image_url",
        "/products/upload",
        multipart,
    )
    .await
}

/// Delete a product. The redirect re-reads the listing, so the row only
/// disappears when the remote delete actually succeeded.
///
/// POST /products/{id}/delete
#[instrument(skip(admin, state))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    state
        .store()
        .authenticated(&admin.access_token)
        .delete_product(id)
        .await?;

    Ok(Redirect::to(PRODUCTS_LIST))
}
