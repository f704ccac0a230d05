//! Authorized-service (assistance) route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use arcline_core::{Brand, ContactSettings, seed};
use arcline_store::hydrate;

use crate::filters;
use crate::state::AppState;

/// Assistance page template.
#[derive(Template, WebTemplate)]
#[template(path = "assistance.html")]
pub struct AssistanceTemplate {
    /// Brands the workshop services, ordered by name.
    pub brands: Vec<Brand>,
    pub contact: ContactSettings,
}

/// Display the authorized-service brand grid.
#[instrument(skip(state))]
pub async fn assistance(State(state): State<AppState>) -> AssistanceTemplate {
    let brands = hydrate(
        "brands",
        state.store().list_brands().await,
        seed::assistance_brands(),
    );

    AssistanceTemplate {
        brands: brands.items,
        contact: state.contact().clone(),
    }
}
