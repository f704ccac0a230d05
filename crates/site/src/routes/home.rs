//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use arcline_core::{ContactSettings, GalleryPhoto, HeroSettings, seed};
use arcline_store::{hydrate, hydrate_single};

use crate::filters;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Hero copy and call-to-action buttons.
    pub hero: HeroSettings,
    /// Workshop gallery, newest first.
    pub gallery: Vec<GalleryPhoto>,
    /// Shared contact details.
    pub contact: ContactSettings,
}

/// Display the home page.
///
/// The hero document and the gallery each get one remote read with the
/// embedded data as fallback; a cold or unreachable backend renders the
/// same page from seeds.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    let hero = hydrate_single(
        "hero",
        state.store().hero_settings().await,
        seed::default_hero(),
    );

    let gallery = hydrate(
        "gallery",
        state.store().list_gallery().await,
        seed::gallery_photos(),
    );

    HomeTemplate {
        hero,
        gallery: gallery.items,
        contact: state.contact().clone(),
    }
}
