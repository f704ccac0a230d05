//! Rental catalog route handler.
//!
//! The catalog grid with the two-dimension filter sidebar. Filter state
//! travels in query parameters, so every combination is a plain link
//! and the empty state's "clear filters" is just `/rental`.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use arcline_core::filter::{ALL, AMPERAGE_BANDS, CatalogFilter, apply, category_options};
use arcline_core::{CatalogItem, seed};
use arcline_store::hydrate;

use crate::filters;
use crate::state::AppState;

/// Filter query parameters.
#[derive(Debug, Deserialize)]
pub struct RentalQuery {
    pub category: Option<String>,
    pub amperage: Option<String>,
}

/// One selectable option in the filter sidebar.
pub struct FilterOption {
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// Product display data for the catalog grid.
pub struct ProductCard {
    pub name: String,
    pub category: String,
    pub kind: String,
    pub amperage: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub specs: Vec<(String, String)>,
    /// WhatsApp consult link prefilled with the item name.
    pub consult_link: String,
}

impl ProductCard {
    fn from_item(item: &CatalogItem, whatsapp: &str) -> Self {
        let message = format!(
            "Hello, I would like to check availability for: {}",
            item.name
        );
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            kind: item.kind.clone(),
            amperage: item.amperage,
            description: item.description.clone(),
            image_url: item.image_url.clone(),
            specs: item
                .specifications
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            consult_link: format!("https://wa.me/{whatsapp}?text={}", urlencoding::encode(&message)),
        }
    }
}

/// Rental catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "rental.html")]
pub struct RentalTemplate {
    pub products: Vec<ProductCard>,
    pub category_options: Vec<FilterOption>,
    pub amperage_options: Vec<FilterOption>,
    pub filtered: bool,
}

/// Link for a filter combination, omitting `All` dimensions.
fn filter_href(category: &str, amperage: &str) -> String {
    let mut params = Vec::new();
    if category != ALL {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if amperage != ALL {
        params.push(format!("amperage={}", urlencoding::encode(amperage)));
    }
    if params.is_empty() {
        "/rental".to_string()
    } else {
        format!("/rental?{}", params.join("&"))
    }
}

/// Display the rental catalog.
#[instrument(skip(state))]
pub async fn rental(
    State(state): State<AppState>,
    Query(query): Query<RentalQuery>,
) -> RentalTemplate {
    let catalog = hydrate(
        "products",
        state.store().list_products().await,
        seed::rental_catalog(),
    );

    let filter = CatalogFilter::from_params(query.category, query.amperage);

    let category_options = category_options(&catalog.items)
        .into_iter()
        .map(|category| FilterOption {
            label: if category == ALL {
                "All categories".to_string()
            } else {
                category.clone()
            },
            href: filter_href(&category, &filter.amperage),
            selected: category == filter.category,
        })
        .collect();

    let amperage_options = std::iter::once(ALL)
        .chain(AMPERAGE_BANDS.iter().copied())
        .map(|band| FilterOption {
            label: if band == ALL {
                "All".to_string()
            } else {
                format!("{band}A")
            },
            href: filter_href(&filter.category, band),
            selected: band == filter.amperage,
        })
        .collect();

    let whatsapp = state.contact().whatsapp.clone();
    let products = apply(&catalog.items, &filter)
        .into_iter()
        .map(|item| ProductCard::from_item(item, &whatsapp))
        .collect();

    RentalTemplate {
        products,
        category_options,
        amperage_options,
        filtered: !filter.is_unfiltered(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_href_omits_all_dimensions() {
        assert_eq!(filter_href(ALL, ALL), "/rental");
        assert_eq!(filter_href("TIG", ALL), "/rental?category=TIG");
        assert_eq!(filter_href(ALL, "200"), "/rental?amperage=200");
        assert_eq!(
            filter_href("MIG/MAG", "250"),
            "/rental?category=MIG%2FMAG&amperage=250"
        );
    }

    #[test]
    fn consult_link_encodes_item_name() {
        let items = seed::rental_catalog();
        let card = ProductCard::from_item(&items[0], "551134567890");
        assert!(card.consult_link.starts_with("https://wa.me/551134567890?text="));
        assert!(!card.consult_link.contains(' '));
    }
}
