//! The rental-catalog filter.
//!
//! Two independent dimensions, AND-combined: equipment category and
//! amperage band. Either dimension can be the `All` sentinel, which
//! disables its predicate. Amperage is matched by exact value against a
//! fixed band list, not as a range.

use crate::types::CatalogItem;

/// Sentinel disabling a filter dimension.
pub const ALL: &str = "All";

/// The fixed amperage bands offered by the sidebar. Compared by exact
/// string match against the stringified rating.
pub const AMPERAGE_BANDS: &[&str] = &["100", "200", "250", "315", "400", "450"];

/// Selected filter state for the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: String,
    pub amperage: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            amperage: ALL.to_string(),
        }
    }
}

impl CatalogFilter {
    /// Build from optional query parameters; absent or empty values mean
    /// `All`.
    #[must_use]
    pub fn from_params(category: Option<String>, amperage: Option<String>) -> Self {
        let normalize = |value: Option<String>| match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => ALL.to_string(),
        };
        Self {
            category: normalize(category),
            amperage: normalize(amperage),
        }
    }

    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.category == ALL && self.amperage == ALL
    }

    /// Whether an item passes both dimensions.
    ///
    /// Items with a zero (not-applicable) rating never match a concrete
    /// amperage band.
    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let category_match = self.category == ALL || item.category == self.category;
        let amperage_match =
            self.amperage == ALL || (item.amperage != 0 && item.amperage.to_string() == self.amperage);
        category_match && amperage_match
    }
}

/// Apply the filter, preserving input order.
#[must_use]
pub fn apply<'a>(items: &'a [CatalogItem], filter: &CatalogFilter) -> Vec<&'a CatalogItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Category options for the sidebar: `All` followed by the distinct
/// categories of the current collection, in first-seen order. Tracks
/// whatever data is loaded, not a hardcoded list.
#[must_use]
pub fn category_options(items: &[CatalogItem]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for item in items {
        if !options.contains(&item.category) {
            options.push(item.category.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn item(id: i64, category: &str, amperage: i64) -> CatalogItem {
        CatalogItem {
            id,
            name: format!("item-{id}"),
            category: category.to_string(),
            kind: String::new(),
            amperage,
            description: String::new(),
            image_url: None,
            specifications: crate::SpecMap::new(),
            created_at: None,
        }
    }

    #[test]
    fn unfiltered_passes_everything() {
        let items = vec![item(1, "TIG", 200), item(2, "Cutting", 0)];
        let filter = CatalogFilter::default();
        assert_eq!(apply(&items, &filter).len(), 2);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let items = vec![
            item(1, "MIG/MAG", 250),
            item(2, "MIG/MAG", 400),
            item(3, "TIG", 250),
        ];
        let filter = CatalogFilter {
            category: "MIG/MAG".to_string(),
            amperage: "250".to_string(),
        };
        let matched = apply(&items, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn zero_amperage_excluded_from_concrete_bands() {
        let items = vec![item(1, "Cutting", 0)];
        for band in AMPERAGE_BANDS {
            let filter = CatalogFilter {
                category: ALL.to_string(),
                amperage: (*band).to_string(),
            };
            assert!(apply(&items, &filter).is_empty(), "band {band}");
        }
        assert_eq!(apply(&items, &CatalogFilter::default()).len(), 1);
    }

    #[test]
    fn amperage_is_exact_match_not_at_least() {
        let items = vec![item(1, "MIG/MAG", 400)];
        let filter = CatalogFilter {
            category: ALL.to_string(),
            amperage: "200".to_string(),
        };
        assert!(apply(&items, &filter).is_empty());
    }

    #[test]
    fn category_options_are_distinct_with_all_sentinel() {
        let items = vec![
            item(1, "TIG", 200),
            item(2, "MIG/MAG", 250),
            item(3, "TIG", 315),
        ];
        assert_eq!(category_options(&items), vec!["All", "TIG", "MIG/MAG"]);
    }

    #[test]
    fn empty_params_normalize_to_all() {
        let filter = CatalogFilter::from_params(Some(String::new()), None);
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn seed_catalog_tig_200_matches_exactly_one() {
        let items = seed::rental_catalog();
        let filter = CatalogFilter {
            category: "TIG".to_string(),
            amperage: "200".to_string(),
        };
        let matched = apply(&items, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 3);
        assert_eq!(matched[0].name, "TIG AC/DC 200A");
    }
}
