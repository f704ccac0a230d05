//! Authorized-service brand types.

use serde::{Deserialize, Serialize};

/// A manufacturer whose equipment the workshop services, as stored in
/// the `brands` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    /// Manufacturer website.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Insert/update payload for a brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBrand {
    pub name: String,
    pub url: String,
    pub logo_url: Option<String>,
}

impl From<Brand> for NewBrand {
    fn from(brand: Brand) -> Self {
        Self {
            name: brand.name,
            url: brand.url,
            logo_url: brand.logo_url,
        }
    }
}
