//! Product form parsing.
//!
//! The product form carries a variable number of specification rows as
//! paired `spec_key`/`spec_value` fields, and the mapping must keep the
//! order the operator built it in. `serde` form extraction flattens
//! repeated keys, so this form is parsed by hand from the raw
//! urlencoded body, walking the pairs in document order.

use arcline_core::{CatalogItem, NewCatalogItem, SpecMap};

/// Category options offered by the product form's select.
pub const PRODUCT_CATEGORIES: &[&str] =
    &["MIG/MAG", "TIG", "Electrode", "Cutting", "Compressed Air"];

/// Parsed state of the product form. Also what gets re-rendered after a
/// rejected submit, so nothing the operator typed is lost.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormData {
    pub name: String,
    pub category: String,
    pub kind: String,
    pub amperage: i64,
    pub description: String,
    /// Public image address; empty means none.
    pub image_url: String,
    pub specifications: SpecMap,
}

impl Default for ProductFormData {
    /// The blank template a new-product form starts from.
    fn default() -> Self {
        Self {
            name: String::new(),
            category: PRODUCT_CATEGORIES[0].to_string(),
            kind: String::new(),
            amperage: 0,
            description: String::new(),
            image_url: String::new(),
            specifications: SpecMap::new(),
        }
    }
}

impl ProductFormData {
    /// Parse the urlencoded body, preserving specification order.
    ///
    /// `spec_key[i]` pairs with `spec_value[i]`; pairs with a blank side
    /// are dropped by the mapping itself. An unparsable amperage reads
    /// as `0` ("not applicable"), mirroring the numeric input's empty
    /// state.
    #[must_use]
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = Self {
            category: String::new(),
            ..Self::default()
        };
        let mut spec_keys = Vec::new();
        let mut spec_values = Vec::new();

        for (key, value) in url::form_urlencoded::parse(body) {
            let value = value.into_owned();
            match key.as_ref() {
                "name" => form.name = value,
                "category" => form.category = value,
                "type" => form.kind = value,
                "amperage" => form.amperage = value.trim().parse().unwrap_or(0),
                "description" => form.description = value,
                "image_url" => form.image_url = value,
                "spec_key" => spec_keys.push(value),
                "spec_value" => spec_values.push(value),
                _ => {}
            }
        }

        for (key, value) in spec_keys.iter().zip(spec_values.iter()) {
            form.specifications.insert(key, value);
        }

        if form.category.is_empty() {
            form.category = PRODUCT_CATEGORIES[0].to_string();
        }

        form
    }

    /// Prefill the form from an existing row (edit mode).
    #[must_use]
    pub fn from_item(item: CatalogItem) -> Self {
        Self {
            name: item.name,
            category: item.category,
            kind: item.kind,
            amperage: item.amperage,
            description: item.description,
            image_url: item.image_url.unwrap_or_default(),
            specifications: item.specifications,
        }
    }

    /// The required-field check re-run server-side.
    ///
    /// # Errors
    ///
    /// Returns the message to show the operator.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        Ok(())
    }

    /// Convert into the row payload submitted to the store.
    #[must_use]
    pub fn into_row(self) -> NewCatalogItem {
        NewCatalogItem {
            name: self.name,
            category: self.category,
            kind: self.kind,
            amperage: self.amperage,
            description: self.description,
            image_url: if self.image_url.trim().is_empty() {
                None
            } else {
                Some(self.image_url)
            },
            specifications: self.specifications,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_spec_pairs_in_order() {
        let body = b"name=TIG+200&category=TIG&type=Inverter&amperage=200&description=d\
                     &spec_key=Voltage&spec_value=220V&spec_key=Peso&spec_value=10kg";
        let form = ProductFormData::from_urlencoded(body);

        assert_eq!(form.name, "TIG 200");
        assert_eq!(form.amperage, 200);
        let specs: Vec<_> = form.specifications.iter().collect();
        assert_eq!(specs, vec![("Voltage", "220V"), ("Peso", "10kg")]);
    }

    #[test]
    fn blank_spec_pairs_are_dropped() {
        let body = b"name=X&spec_key=Peso&spec_value=&spec_key=&spec_value=10kg";
        let form = ProductFormData::from_urlencoded(body);
        assert!(form.specifications.is_empty());
    }

    #[test]
    fn submitting_without_specs_yields_empty_object_and_zero_amperage() {
        let body = b"name=X&category=TIG&type=&amperage=0&description=";
        let row = ProductFormData::from_urlencoded(body).into_row();

        let payload = serde_json::to_value(&row).unwrap();
        assert_eq!(payload["name"], "X");
        assert_eq!(payload["amperage"], 0);
        assert_eq!(payload["specifications"], serde_json::json!({}));
    }

    #[test]
    fn unparsable_amperage_reads_as_zero() {
        let form = ProductFormData::from_urlencoded(b"name=X&amperage=abc");
        assert_eq!(form.amperage, 0);
    }

    #[test]
    fn blank_name_fails_validation() {
        let form = ProductFormData::from_urlencoded(b"name=++&category=TIG");
        assert!(form.validate().is_err());
    }

    #[test]
    fn empty_image_url_becomes_null() {
        let row = ProductFormData::from_urlencoded(b"name=X&image_url=").into_row();
        assert_eq!(row.image_url, None);
    }

    #[test]
    fn edit_round_trip_keeps_entered_data() {
        let body = b"name=MIG+250&category=MIG%2FMAG&type=Internal&amperage=250\
                     &description=compact&image_url=https%3A%2F%2Fcdn%2Fa.png\
                     &spec_key=Peso&spec_value=10kg";
        let form = ProductFormData::from_urlencoded(body);
        let row = form.clone().into_row();

        assert_eq!(row.category, "MIG/MAG");
        assert_eq!(row.image_url.as_deref(), Some("https://cdn/a.png"));
        assert_eq!(form.specifications.get("Peso"), Some("10kg"));
    }
}
