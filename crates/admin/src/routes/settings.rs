//! Site settings route handlers.
//!
//! Hero and contact documents are edited together and saved as two
//! whole-document upserts running concurrently; per-document errors are
//! aggregated into one message and the form stays put either way.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::instrument;

use arcline_core::{ContactSettings, HeroSettings, SiteSetting};
use arcline_store::hydrate_single;

use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Flat form state covering both documents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFormData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub primary_button_text: String,
    #[serde(default)]
    pub primary_button_link: String,
    #[serde(default)]
    pub secondary_button_text: String,
    #[serde(default)]
    pub secondary_button_link: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub whatsapp_display: String,
    #[serde(default)]
    pub email: String,
}

impl SettingsFormData {
    fn from_documents(hero: HeroSettings, contact: ContactSettings) -> Self {
        Self {
            title: hero.title,
            subtitle: hero.subtitle,
            video_url: hero.video_url,
            primary_button_text: hero.primary_button_text,
            primary_button_link: hero.primary_button_link,
            secondary_button_text: hero.secondary_button_text,
            secondary_button_link: hero.secondary_button_link,
            whatsapp: contact.whatsapp,
            whatsapp_display: contact.whatsapp_display,
            email: contact.email,
        }
    }

    fn hero(&self) -> HeroSettings {
        HeroSettings {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            video_url: self.video_url.clone(),
            primary_button_text: self.primary_button_text.clone(),
            primary_button_link: self.primary_button_link.clone(),
            secondary_button_text: self.secondary_button_text.clone(),
            secondary_button_link: self.secondary_button_link.clone(),
        }
    }

    fn contact(&self) -> ContactSettings {
        ContactSettings {
            whatsapp: self.whatsapp.clone(),
            whatsapp_display: self.whatsapp_display.clone(),
            email: self.email.clone(),
        }
    }
}

/// Settings form template.
#[derive(Template, WebTemplate)]
#[template(path = "settings/form.html")]
pub struct SettingsTemplate {
    pub form: SettingsFormData,
    pub saved: bool,
    pub error: Option<String>,
}

/// Render the settings form, prefilled from the store; missing rows
/// start blank.
///
/// GET /settings
#[instrument(skip(admin, state))]
pub async fn form(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> SettingsTemplate {
    let store = state.store().authenticated(&admin.access_token);

    let hero = hydrate_single("hero", store.hero_settings().await, HeroSettings::default());
    let contact = hydrate_single(
        "contact",
        store.contact_settings().await,
        ContactSettings::default(),
    );

    SettingsTemplate {
        form: SettingsFormData::from_documents(hero, contact),
        saved: false,
        error: None,
    }
}

/// Upsert both documents.
///
/// POST /settings
#[instrument(skip(admin, state, form))]
pub async fn save(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<SettingsFormData>,
) -> SettingsTemplate {
    let store = state.store().authenticated(&admin.access_token);

    let hero = SiteSetting::Hero(form.hero());
    let contact = SiteSetting::Contact(form.contact());

    let (hero_outcome, contact_outcome) =
        tokio::join!(store.upsert_setting(&hero), store.upsert_setting(&contact));

    let failures: Vec<String> = [hero_outcome.err(), contact_outcome.err()]
        .into_iter()
        .flatten()
        .map(|error| error.to_string())
        .collect();

    if failures.is_empty() {
        SettingsTemplate {
            form,
            saved: true,
            error: None,
        }
    } else {
        tracing::error!(errors = ?failures, "settings save failed");
        SettingsTemplate {
            form,
            saved: false,
            error: Some(format!("Could not save: {}", failures.join(", "))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_round_trips_both_documents() {
        let hero = HeroSettings {
            title: "Welding equipment".to_string(),
            subtitle: "Rental and service".to_string(),
            video_url: "https://example/embed".to_string(),
            primary_button_text: "Catalog".to_string(),
            primary_button_link: "/rental".to_string(),
            secondary_button_text: "Service".to_string(),
            secondary_button_link: "/assistance".to_string(),
        };
        let contact = ContactSettings {
            whatsapp: "551134567890".to_string(),
            whatsapp_display: "(11) 3456-7890".to_string(),
            email: "rental@arcline.example".to_string(),
        };

        let form = SettingsFormData::from_documents(hero.clone(), contact.clone());
        assert_eq!(form.hero(), hero);
        assert_eq!(form.contact(), contact);
    }
}
