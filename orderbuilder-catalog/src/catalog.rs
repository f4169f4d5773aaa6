//! Catalog data: vendors, categories and the items they offer.
use serde::{Deserialize, Serialize};

/// Substring (lowercase) that marks an item as user-priced artwork.
pub const ARTWORK_MARKER: &str = "artwork";

/// A single item offered in a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogItem {
    /// Whether this item takes a custom price instead of its catalog price.
    #[must_use]
    pub fn is_artwork(&self) -> bool {
        is_artwork_name(&self.name)
    }

    /// Description text, or `placeholder` when the catalog has none.
    #[must_use]
    pub fn description_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.description
            .as_deref()
            .filter(|desc| !desc.trim().is_empty())
            .unwrap_or(placeholder)
    }
}

/// Case-insensitive substring check for the artwork marker.
#[must_use]
pub fn is_artwork_name(name: &str) -> bool {
    name.to_lowercase().contains(ARTWORK_MARKER)
}

/// A named, ordered group of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

impl CatalogCategory {
    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

/// Everything one vendor sells, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorCatalog {
    pub vendor_id: String,
    pub vendor_name: String,
    #[serde(default)]
    pub categories: Vec<CatalogCategory>,
}

impl VendorCatalog {
    /// Find a category by name, ignoring case.
    #[must_use]
    pub fn find_category(&self, name: &str) -> Option<&CatalogCategory> {
        self.categories
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(name))
    }

    /// Find an item by ID across all categories, returning it with its category.
    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<(&CatalogCategory, &CatalogItem)> {
        self.categories.iter().find_map(|category| {
            category
                .find_item(item_id)
                .map(|item| (category, item))
        })
    }
}

/// Complete catalog file: one entry per vendor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub vendors: Vec<VendorCatalog>,
}

impl CatalogData {
    /// Parse catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn vendor(&self, vendor_id: &str) -> Option<&VendorCatalog> {
        self.vendors.iter().find(|vendor| vendor.vendor_id == vendor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            price: 10.0,
            description: None,
        }
    }

    #[test]
    fn artwork_detection_ignores_case() {
        assert!(item("a1", "Custom ARTWORK panel").is_artwork());
        assert!(item("a2", "Artwork").is_artwork());
        assert!(!item("a3", "Art work").is_artwork());
        assert!(!item("a4", "Wood basket").is_artwork());
    }

    #[test]
    fn description_falls_back_to_placeholder() {
        let mut bare = item("b1", "Wood");
        assert_eq!(bare.description_or("n/a"), "n/a");
        bare.description = Some("   ".to_string());
        assert_eq!(bare.description_or("n/a"), "n/a");
        bare.description = Some("Oak".to_string());
        assert_eq!(bare.description_or("n/a"), "Oak");
    }

    #[test]
    fn vendor_lookups_find_items_and_categories() {
        let vendor = VendorCatalog {
            vendor_id: "v1".to_string(),
            vendor_name: "Vendor".to_string(),
            categories: vec![CatalogCategory {
                name: "BASKET".to_string(),
                items: vec![item("b1", "Wood")],
            }],
        };
        assert!(vendor.find_category("basket").is_some());
        let (category, found) = vendor.find_item("b1").expect("item exists");
        assert_eq!(category.name, "BASKET");
        assert_eq!(found.name, "Wood");
        assert!(vendor.find_item("missing").is_none());
    }

    #[test]
    fn catalog_json_defaults_missing_collections() {
        let data = CatalogData::from_json(
            r#"{"vendors":[{"vendor_id":"v1","vendor_name":"V","categories":[{"name":"BOWL"}]}]}"#,
        )
        .expect("valid json");
        let vendor = data.vendor("v1").expect("vendor");
        assert!(vendor.categories[0].items.is_empty());
        assert!(data.vendor("v2").is_none());
    }
}
