//! Envelope compatibility: which baskets and burners fit a chosen envelope.
use crate::catalog::{CatalogCategory, CatalogItem};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Looks up compatible item names for a vendor's envelope.
pub trait CompatibilityLookup {
    fn compatible_baskets(&self, vendor_id: &str, envelope: &str) -> BTreeSet<String>;
    fn compatible_burners(&self, vendor_id: &str, envelope: &str) -> BTreeSet<String>;
}

/// Which compatibility list, if any, gates a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRule {
    Basket,
    Burner,
    Unfiltered,
}

impl FilterRule {
    #[must_use]
    pub fn for_category(category_name: &str) -> Self {
        if category_name.eq_ignore_ascii_case("BASKET") {
            Self::Basket
        } else if category_name.eq_ignore_ascii_case("BURNER") {
            Self::Burner
        } else {
            Self::Unfiltered
        }
    }
}

/// Items of `category` that may be offered given the selected envelope.
///
/// Without an envelope every item is returned. Baskets and burners are
/// narrowed to the names the lookup reports, in catalog order; an empty
/// lookup result yields an empty list.
#[must_use]
pub fn filter_items<'a, C>(
    category: &'a CatalogCategory,
    vendor_id: &str,
    selected_envelope: Option<&str>,
    lookup: &C,
) -> Vec<&'a CatalogItem>
where
    C: CompatibilityLookup + ?Sized,
{
    let Some(envelope) = selected_envelope else {
        return category.items.iter().collect();
    };

    let allowed = match FilterRule::for_category(&category.name) {
        FilterRule::Basket => lookup.compatible_baskets(vendor_id, envelope),
        FilterRule::Burner => lookup.compatible_burners(vendor_id, envelope),
        FilterRule::Unfiltered => return category.items.iter().collect(),
    };

    let filtered: Vec<&CatalogItem> = category
        .items
        .iter()
        .filter(|item| allowed.contains(&item.name))
        .collect();
    log::trace!(
        "compatibility filter kept {}/{} items of {} for envelope {envelope}",
        filtered.len(),
        category.items.len(),
        category.name
    );
    filtered
}

/// Compatible accessories for one envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeCompatibility {
    #[serde(default)]
    pub baskets: BTreeSet<String>,
    #[serde(default)]
    pub burners: BTreeSet<String>,
}

/// Vendor-specific compatibility table loaded from `compatibility.json`.
///
/// Shape: `{ "vendors": { vendor_id: { envelope_name: { baskets, burners } } } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityTable {
    #[serde(default)]
    pub vendors: HashMap<String, HashMap<String, EnvelopeCompatibility>>,
}

impl CompatibilityTable {
    /// Parse a compatibility table from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the table shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn entry(&self, vendor_id: &str, envelope: &str) -> Option<&EnvelopeCompatibility> {
        self.vendors.get(vendor_id).and_then(|envelopes| {
            envelopes
                .iter()
                .find_map(|(name, entry)| name.eq_ignore_ascii_case(envelope).then_some(entry))
        })
    }
}

impl CompatibilityLookup for CompatibilityTable {
    fn compatible_baskets(&self, vendor_id: &str, envelope: &str) -> BTreeSet<String> {
        self.entry(vendor_id, envelope)
            .map(|entry| entry.baskets.clone())
            .unwrap_or_default()
    }

    fn compatible_burners(&self, vendor_id: &str, envelope: &str) -> BTreeSet<String> {
        self.entry(vendor_id, envelope)
            .map(|entry| entry.burners.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeLookup {
        baskets: Vec<&'static str>,
        burners: Vec<&'static str>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl CompatibilityLookup for FakeLookup {
        fn compatible_baskets(&self, vendor_id: &str, envelope: &str) -> BTreeSet<String> {
            self.calls
                .borrow_mut()
                .push((vendor_id.to_string(), envelope.to_string()));
            self.baskets.iter().map(ToString::to_string).collect()
        }

        fn compatible_burners(&self, vendor_id: &str, envelope: &str) -> BTreeSet<String> {
            self.calls
                .borrow_mut()
                .push((vendor_id.to_string(), envelope.to_string()));
            self.burners.iter().map(ToString::to_string).collect()
        }
    }

    fn item(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            price: 5.0,
            description: None,
        }
    }

    fn category(name: &str) -> CatalogCategory {
        CatalogCategory {
            name: name.to_string(),
            items: vec![item("x1", "Wood"), item("x2", "Steel"), item("x3", "Glass")],
        }
    }

    fn ids(items: &[&CatalogItem]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn no_envelope_returns_everything_for_any_category() {
        let lookup = FakeLookup::default();
        for name in ["BASKET", "burner", "BOWL", ""] {
            let cat = category(name);
            let filtered = filter_items(&cat, "v1", None, &lookup);
            assert_eq!(ids(&filtered), vec!["x1", "x2", "x3"]);
        }
        assert!(lookup.calls.borrow().is_empty());
    }

    #[test]
    fn basket_keeps_intersection_in_catalog_order() {
        let lookup = FakeLookup {
            baskets: vec!["Glass", "Wood", "Marble"],
            ..FakeLookup::default()
        };
        let cat = category("Basket");
        let filtered = filter_items(&cat, "v1", Some("E1"), &lookup);
        assert_eq!(ids(&filtered), vec!["x1", "x3"]);
        assert_eq!(
            lookup.calls.borrow().as_slice(),
            &[("v1".to_string(), "E1".to_string())]
        );
    }

    #[test]
    fn burner_uses_burner_lookup() {
        let lookup = FakeLookup {
            baskets: vec!["Wood"],
            burners: vec!["Steel"],
            ..FakeLookup::default()
        };
        let cat = category("BURNER");
        let filtered = filter_items(&cat, "v1", Some("E1"), &lookup);
        assert_eq!(ids(&filtered), vec!["x2"]);
    }

    #[test]
    fn empty_lookup_yields_empty_list() {
        let lookup = FakeLookup::default();
        let cat = category("BASKET");
        assert!(filter_items(&cat, "v1", Some("E1"), &lookup).is_empty());
    }

    #[test]
    fn other_categories_ignore_envelope() {
        let lookup = FakeLookup::default();
        let cat = category("BOWL");
        let filtered = filter_items(&cat, "v1", Some("E1"), &lookup);
        assert_eq!(filtered.len(), 3);
        assert!(lookup.calls.borrow().is_empty());
    }

    #[test]
    fn filter_rule_matches_names_exactly_ignoring_case() {
        assert_eq!(FilterRule::for_category("basket"), FilterRule::Basket);
        assert_eq!(FilterRule::for_category("BuRnEr"), FilterRule::Burner);
        assert_eq!(FilterRule::for_category("BASKETS"), FilterRule::Unfiltered);
    }

    #[test]
    fn table_lookup_matches_envelope_case_insensitively() {
        let table = CompatibilityTable::from_json(
            r#"{"vendors":{"v1":{"Classic":{"baskets":["Wood"],"burners":["Steel"]}}}}"#,
        )
        .unwrap();
        assert!(table.compatible_baskets("v1", "classic").contains("Wood"));
        assert!(table.compatible_burners("v1", "CLASSIC").contains("Steel"));
        assert!(table.compatible_baskets("v2", "Classic").is_empty());
        assert!(table.compatible_burners("v1", "Other").is_empty());
    }
}
