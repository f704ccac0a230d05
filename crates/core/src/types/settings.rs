//! Site settings documents.
//!
//! The `site_settings` table holds one row per key, each with a
//! structured JSON document as its value. Rather than passing untyped
//! documents around, each key gets its own document type and the pair is
//! a tagged sum, so a shape mismatch is a compile error instead of a
//! template surprise.

use serde::{Deserialize, Serialize};

/// Keys of the `site_settings` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKey {
    Hero,
    Contact,
}

impl SettingKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Contact => "contact",
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The home-page hero document (`key = "hero"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSettings {
    pub title: String,
    pub subtitle: String,
    /// Embeddable video URL for the hero background.
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
}

/// The shared contact document (`key = "contact"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSettings {
    /// Dialable number, digits only (used for WhatsApp links).
    pub whatsapp: String,
    /// Human-readable form of the same number.
    pub whatsapp_display: String,
    pub email: String,
}

/// A settings row ready to be upserted: the variant selects the key, the
/// payload is the whole value document (rows are replaced, never
/// patched).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSetting {
    Hero(HeroSettings),
    Contact(ContactSettings),
}

impl SiteSetting {
    #[must_use]
    pub const fn key(&self) -> SettingKey {
        match self {
            Self::Hero(_) => SettingKey::Hero,
            Self::Contact(_) => SettingKey::Contact,
        }
    }

    /// The value document for the row.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be represented as JSON
    /// (practically unreachable for these shapes).
    pub fn value_document(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::Hero(hero) => serde_json::to_value(hero),
            Self::Contact(contact) => serde_json::to_value(contact),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn setting_key_matches_variant() {
        assert_eq!(SiteSetting::Hero(HeroSettings::default()).key(), SettingKey::Hero);
        assert_eq!(
            SiteSetting::Contact(ContactSettings::default()).key(),
            SettingKey::Contact
        );
        assert_eq!(SettingKey::Hero.as_str(), "hero");
        assert_eq!(SettingKey::Contact.as_str(), "contact");
    }

    #[test]
    fn contact_document_round_trips() {
        let contact = ContactSettings {
            whatsapp: "551134567890".to_string(),
            whatsapp_display: "(11) 3456-7890".to_string(),
            email: "rental@arcline.example".to_string(),
        };

        let value = SiteSetting::Contact(contact.clone()).value_document().unwrap();
        let back: ContactSettings = serde_json::from_value(value).unwrap();
        assert_eq!(back, contact);
    }
}
