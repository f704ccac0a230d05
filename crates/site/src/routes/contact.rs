//! Contact page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use arcline_core::ContactSettings;

use crate::filters;
use crate::state::AppState;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub contact: ContactSettings,
    /// WhatsApp deep link for the floating button.
    pub whatsapp_link: String,
}

/// Display the contact page. Details come from the state built at
/// startup; there is no per-request settings read here.
#[instrument(skip(state))]
pub async fn contact(State(state): State<AppState>) -> ContactTemplate {
    let contact = state.contact().clone();
    let whatsapp_link = format!("https://wa.me/{}", contact.whatsapp);

    ContactTemplate {
        contact,
        whatsapp_link,
    }
}
