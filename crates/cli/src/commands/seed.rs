//! Seed the remote store with the embedded default data.
//!
//! Each target pushes the same data the applications embed as
//! fallbacks, so a freshly provisioned backend serves the content the
//! public site would otherwise synthesize. Per-row results are logged;
//! a target fails if any of its rows failed.

use secrecy::ExposeSecret;
use tracing::{error, info};

use arcline_core::{NewBrand, NewCatalogItem, NewGalleryPhoto, SiteSetting, seed};
use arcline_store::{StoreClient, StoreConfig};

type CliError = Box<dyn std::error::Error>;

/// Build a client carrying the service-role key.
///
/// # Errors
///
/// Returns an error if the environment is incomplete or the key is
/// missing - seeding never runs with the public anon key.
fn service_client() -> Result<StoreClient, CliError> {
    dotenvy::dotenv().ok();

    let config = StoreConfig::from_env()?;
    let service_key = config
        .service_key
        .clone()
        .ok_or("STORE_SERVICE_KEY not set")?;

    let client = StoreClient::new(&config)?;
    Ok(client.authenticated(service_key.expose_secret()))
}

/// Seed the rental catalog.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or any row failed.
pub async fn catalog() -> Result<(), CliError> {
    let store = service_client()?;
    let items = seed::rental_catalog();

    info!(count = items.len(), "Seeding rental catalog");

    let mut inserted = 0u32;
    let mut failed = 0u32;
    for item in items {
        let name = item.name.clone();
        let row = NewCatalogItem::from(item);
        match store.insert_product(&row).await {
            Ok(stored) => {
                inserted += 1;
                info!(id = stored.id, name = %name, "inserted");
            }
            Err(e) => {
                failed += 1;
                error!(name = %name, error = %e, "insert failed");
            }
        }
    }

    info!(inserted, failed, "Catalog seeding complete");
    finish(failed)
}

/// Seed the brand list.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or any row failed.
pub async fn brands() -> Result<(), CliError> {
    let store = service_client()?;
    let brands = seed::assistance_brands();

    info!(count = brands.len(), "Seeding brands");

    let mut inserted = 0u32;
    let mut failed = 0u32;
    for brand in brands {
        let name = brand.name.clone();
        let row = NewBrand::from(brand);
        match store.insert_brand(&row).await {
            Ok(stored) => {
                inserted += 1;
                info!(id = stored.id, name = %name, "inserted");
            }
            Err(e) => {
                failed += 1;
                error!(name = %name, error = %e, "insert failed");
            }
        }
    }

    info!(inserted, failed, "Brand seeding complete");
    finish(failed)
}

/// Seed the gallery with the bundled photo paths (one bulk insert,
/// matching the back office's seeding action).
///
/// # Errors
///
/// Returns an error if configuration is incomplete or the insert failed.
pub async fn gallery() -> Result<(), CliError> {
    let store = service_client()?;

    let rows: Vec<NewGalleryPhoto> = seed::INITIAL_GALLERY_PATHS
        .iter()
        .map(|path| NewGalleryPhoto {
            url: (*path).to_string(),
        })
        .collect();

    info!(count = rows.len(), "Seeding gallery");
    store.insert_gallery_photos(&rows).await?;
    info!("Gallery seeding complete");
    Ok(())
}

/// Upsert the default hero and contact documents.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or an upsert failed.
pub async fn settings() -> Result<(), CliError> {
    let store = service_client()?;

    for setting in [
        SiteSetting::Hero(seed::default_hero()),
        SiteSetting::Contact(seed::default_contact()),
    ] {
        let key = setting.key();
        store.upsert_setting(&setting).await?;
        info!(%key, "settings document upserted");
    }

    info!("Settings seeding complete");
    Ok(())
}

/// Seed everything, in order.
///
/// # Errors
///
/// Returns the first target's error.
pub async fn all() -> Result<(), CliError> {
    catalog().await?;
    brands().await?;
    gallery().await?;
    settings().await?;
    Ok(())
}

fn finish(failed: u32) -> Result<(), CliError> {
    if failed > 0 {
        return Err(format!("{failed} rows failed").into());
    }
    Ok(())
}
