//! Domain row types mirroring the remote store's tables.
//!
//! Every type here is an ephemeral, disposable copy of a row owned by the
//! hosted backend; nothing in this crate persists state locally.

mod brand;
mod catalog;
mod gallery;
mod profile;
mod settings;

pub use brand::{Brand, NewBrand};
pub use catalog::{CatalogItem, NewCatalogItem, SpecMap};
pub use gallery::{GalleryPhoto, NewGalleryPhoto};
pub use profile::AdminProfile;
pub use settings::{ContactSettings, HeroSettings, SettingKey, SiteSetting};
