//! Rental catalog item types and the technical-specification mapping.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A rental catalog item, as stored in the `products` table.
///
/// `amperage` of `0` means "not applicable" (mechanized cutters,
/// compressors); the catalog filter excludes such items from every
/// concrete amperage band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Subtype within the category (e.g. "Inverter", "Rectifier").
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub amperage: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub specifications: SpecMap,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert/update payload for a catalog item.
///
/// The id and creation timestamp are owned by the remote store. Every
/// field is always serialized - submitting with no specifications sends
/// an empty object, and an unrated item sends `"amperage": 0`, never
/// null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCatalogItem {
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amperage: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub specifications: SpecMap,
}

impl From<CatalogItem> for NewCatalogItem {
    fn from(item: CatalogItem) -> Self {
        Self {
            name: item.name,
            category: item.category,
            kind: item.kind,
            amperage: item.amperage,
            description: item.description,
            image_url: item.image_url,
            specifications: item.specifications,
        }
    }
}

/// User-extensible mapping of technical specifications.
///
/// Keys are unique; display order follows insertion order, so the
/// backing storage is a vector of pairs rather than a hash map. On the
/// wire this is a plain JSON object (`{"Peso": "10kg", ...}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecMap(Vec<(String, String)>);

impl SpecMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add or replace an entry.
    ///
    /// A blank key or blank value (after trimming) makes this a no-op,
    /// returning `false`. Replacing an existing key keeps its position.
    pub fn insert(&mut self, key: &str, value: &str) -> bool {
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return false;
        }
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.0.push((key.to_string(), value.to_string())),
        }
        true
    }

    /// Remove an entry by key, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(index).1)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for SpecMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpecMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecMapVisitor;

        impl<'de> Visitor<'de> for SpecMapVisitor {
            type Value = SpecMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of specification names to values")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                // A null `specifications` column reads as an empty mapping.
                Ok(SpecMap::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    entries.push((key, value));
                }
                Ok(SpecMap(entries))
            }
        }

        deserializer.deserialize_any(SpecMapVisitor)
    }
}

impl FromIterator<(String, String)> for SpecMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(&key, &value);
        }
        map
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_blank_key_or_value() {
        let mut specs = SpecMap::new();
        assert!(!specs.insert("", "x"));
        assert!(!specs.insert("x", ""));
        assert!(!specs.insert("   ", "x"));
        assert!(specs.is_empty());
    }

    #[test]
    fn remove_restores_prior_state() {
        let mut specs = SpecMap::new();
        specs.insert("Voltage", "220V");
        let before = specs.clone();

        assert!(specs.insert("Peso", "10kg"));
        assert_eq!(specs.remove("Peso"), Some("10kg".to_string()));
        assert_eq!(specs, before);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut specs = SpecMap::new();
        specs.insert("Peso", "10kg");
        specs.insert("Ciclo", "60%");
        specs.insert("Peso", "12kg");

        let entries: Vec<_> = specs.iter().collect();
        assert_eq!(entries, vec![("Peso", "12kg"), ("Ciclo", "60%")]);
    }

    #[test]
    fn serializes_as_object_in_insertion_order() {
        let mut specs = SpecMap::new();
        specs.insert("Voltage", "220V");
        specs.insert("Duty cycle", "60%");

        let json = serde_json::to_string(&specs).unwrap();
        assert_eq!(json, r#"{"Voltage":"220V","Duty cycle":"60%"}"#);
    }

    #[test]
    fn empty_map_serializes_as_empty_object() {
        let json = serde_json::to_string(&SpecMap::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn deserializes_null_as_empty() {
        let specs: SpecMap = serde_json::from_str("null").unwrap();
        assert!(specs.is_empty());
    }

    #[test]
    fn round_trip_preserves_document_order() {
        let json = r#"{"Duty cycle":"60%","Voltage":"220V","Peso":"32kg"}"#;
        let specs: SpecMap = serde_json::from_str(json).unwrap();

        let keys: Vec<_> = specs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Duty cycle", "Voltage", "Peso"]);
        assert_eq!(serde_json::to_string(&specs).unwrap(), json);
    }

    #[test]
    fn new_item_payload_keeps_zero_amperage_and_empty_specs() {
        let item = NewCatalogItem {
            name: "X".to_string(),
            ..NewCatalogItem::default()
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["amperage"], 0);
        assert_eq!(value["specifications"], serde_json::json!({}));
        assert!(value["image_url"].is_null());
    }
}
