use orderbuilder_catalog::{
    BehaviorClassifier, CatalogCategory, CatalogItem, CategoryBehavior, CompatibilityLookup,
    ENVELOPE_CATEGORY, EmbeddedDataLoader, SelectionMap, SelectionRequest, SelectorEvent,
    SelectorView, filter_items, load_assets,
};
use std::collections::BTreeSet;

struct FixedLookup(Vec<&'static str>);

impl CompatibilityLookup for FixedLookup {
    fn compatible_baskets(&self, vendor_id: &str, envelope: &str) -> BTreeSet<String> {
        assert_eq!(vendor_id, "v1");
        assert_eq!(envelope, "E1");
        self.0.iter().map(ToString::to_string).collect()
    }

    fn compatible_burners(&self, _vendor_id: &str, _envelope: &str) -> BTreeSet<String> {
        BTreeSet::new()
    }
}

#[test]
fn basket_example_filters_to_lookup_result() {
    let category = CatalogCategory {
        name: "BASKET".to_string(),
        items: vec![CatalogItem {
            id: "b1".to_string(),
            name: "Wood".to_string(),
            price: 10.0,
            description: None,
        }],
    };

    let filtered = filter_items(&category, "v1", Some("E1"), &FixedLookup(vec!["Wood"]));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "b1");

    let filtered = filter_items(&category, "v1", Some("E1"), &FixedLookup(Vec::new()));
    assert!(filtered.is_empty());
}

#[test]
fn every_category_is_unfiltered_without_envelope() {
    let assets = load_assets(&EmbeddedDataLoader).expect("embedded data");
    for vendor in &assets.catalog.vendors {
        for category in &vendor.categories {
            let filtered = filter_items(category, &vendor.vendor_id, None, &assets.compatibility);
            assert_eq!(filtered.len(), category.items.len(), "{}", category.name);
        }
    }
}

#[test]
fn travel_envelope_leaves_no_compatible_basket() {
    let assets = load_assets(&EmbeddedDataLoader).expect("embedded data");
    let vendor = assets.vendor("smokehaus").expect("vendor");
    let basket = vendor.find_category("basket").expect("basket category");
    let burner = vendor.find_category("burner").expect("burner category");

    assert!(filter_items(basket, "smokehaus", Some("Travel"), &assets.compatibility).is_empty());
    let burners = filter_items(burner, "smokehaus", Some("Travel"), &assets.compatibility);
    let names: Vec<&str> = burners.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Silicone"]);
}

#[test]
fn embedded_behaviors_cover_every_mode() {
    let assets = load_assets(&EmbeddedDataLoader).expect("embedded data");
    assert_eq!(
        assets.behaviors.classify(ENVELOPE_CATEGORY),
        CategoryBehavior::Single
    );
    assert_eq!(assets.behaviors.classify("coal"), CategoryBehavior::MultiQty);
    assert_eq!(assets.behaviors.classify("Accessories"), CategoryBehavior::Multi);
    assert_eq!(assets.behaviors.classify("UNLISTED"), CategoryBehavior::Single);
}

#[test]
fn envelope_pick_then_basket_pick_flows_through_selection_map() {
    let assets = load_assets(&EmbeddedDataLoader).expect("embedded data");
    let vendor = assets.vendor("smokehaus").expect("vendor");
    let mut selections = SelectionMap::new();

    let envelope = vendor.find_category(ENVELOPE_CATEGORY).expect("envelope");
    let request = {
        let view = SelectorView::build(
            envelope,
            &vendor.vendor_id,
            None,
            &selections,
            &assets.behaviors,
            &assets.compatibility,
        );
        view.handle(&SelectorEvent::Pick {
            item_id: "sh-env-classic".to_string(),
        })
        .expect("pick resolves")
    };
    selections.apply(request, CategoryBehavior::Single);
    assert_eq!(selections.envelope_name(ENVELOPE_CATEGORY), Some("Classic"));

    let basket = vendor.find_category("BASKET").expect("basket");
    let envelope_name = selections
        .envelope_name(ENVELOPE_CATEGORY)
        .map(ToString::to_string);
    let view = SelectorView::build(
        basket,
        &vendor.vendor_id,
        envelope_name.as_deref(),
        &selections,
        &assets.behaviors,
        &assets.compatibility,
    );
    let offered: Vec<&str> = view.candidates().into_iter().map(|item| item.id.as_str()).collect();
    assert_eq!(offered, vec!["sh-bsk-wood", "sh-bsk-steel"]);
    let glass = view.handle(&SelectorEvent::Pick {
        item_id: "sh-bsk-glass".to_string(),
    });
    assert!(glass.is_none());
    let wood = view.handle(&SelectorEvent::Pick {
        item_id: "sh-bsk-wood".to_string(),
    });
    assert!(matches!(wood, Some(SelectionRequest::Select(ref s)) if s.category == "BASKET"));
}
