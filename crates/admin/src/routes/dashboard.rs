//! Dashboard list route handlers.
//!
//! One route, two tabs (products and brands), each with substring
//! search over the fields an operator actually scans for. The search is
//! applied to the full collection after the remote read; the backend is
//! never asked to filter.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use arcline_core::{Brand, CatalogItem};

use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Dashboard query parameters.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    pub q: Option<String>,
}

/// Case-insensitive substring search over name or category.
fn matches_product(item: &CatalogItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    item.name.to_lowercase().contains(&query) || item.category.to_lowercase().contains(&query)
}

/// Case-insensitive substring search over the brand name.
fn matches_brand(brand: &Brand, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    brand.name.to_lowercase().contains(&query.to_lowercase())
}

/// Products tab template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/products.html")]
pub struct ProductsDashboardTemplate {
    pub admin_email: String,
    pub search: String,
    pub products: Vec<CatalogItem>,
    pub load_error: bool,
}

/// Brands tab template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/brands.html")]
pub struct BrandsDashboardTemplate {
    pub admin_email: String,
    pub search: String,
    pub brands: Vec<Brand>,
    pub load_error: bool,
}

/// Redirect the root to the dashboard.
///
/// GET /
pub async fn root() -> Redirect {
    Redirect::to("/dashboard")
}

/// Render the active dashboard tab.
///
/// GET /dashboard?tab=products|brands&q=search
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let store = state.store().authenticated(&admin.access_token);
    let search = query.q.unwrap_or_default();

    if query.tab.as_deref() == Some("brands") {
        let (brands, load_error) = match store.list_brands().await {
            Ok(brands) => (brands, false),
            Err(error) => {
                tracing::error!(error = %error, "failed to list brands");
                (Vec::new(), true)
            }
        };

        let brands = brands
            .into_iter()
            .filter(|brand| matches_brand(brand, &search))
            .collect();

        BrandsDashboardTemplate {
            admin_email: admin.email,
            search,
            brands,
            load_error,
        }
        .into_response()
    } else {
        let (products, load_error) = match store.list_products().await {
            Ok(products) => (products, false),
            Err(error) => {
                tracing::error!(error = %error, "failed to list products");
                (Vec::new(), true)
            }
        };

        let products = products
            .into_iter()
            .filter(|item| matches_product(item, &search))
            .collect();

        ProductsDashboardTemplate {
            admin_email: admin.email,
            search,
            products,
            load_error,
        }
        .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcline_core::seed;

    #[test]
    fn product_search_covers_name_and_category() {
        let items = seed::rental_catalog();

        let by_name: Vec<_> = items.iter().filter(|i| matches_product(i, "tig")).collect();
        assert_eq!(by_name.len(), 1);

        let by_category: Vec<_> = items
            .iter()
            .filter(|i| matches_product(i, "cutting"))
            .collect();
        assert_eq!(by_category.len(), 2);

        assert_eq!(
            items.iter().filter(|i| matches_product(i, "")).count(),
            items.len()
        );
    }

    #[test]
    fn brand_search_is_case_insensitive() {
        let brands = seed::assistance_brands();
        let hits: Vec<_> = brands.iter().filter(|b| matches_brand(b, "esab")).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "ESAB");
    }
}
