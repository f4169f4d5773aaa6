use futures::executor::block_on;
use orderbuilder_catalog::{
    BehaviorTable, CatalogAssets, CatalogCategory, CatalogData, CatalogItem, CategoryBehavior,
    CompatibilityTable, EnvelopeCompatibility, VendorCatalog,
};
use orderbuilder_web::components::header::{Header, Props as HeaderProps};
use orderbuilder_web::components::ui::order_builder::{OrderBuilder, OrderBuilderProps};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn item(id: &str, name: &str, price: f64) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: None,
    }
}

fn small_assets() -> Rc<CatalogAssets> {
    let vendor = VendorCatalog {
        vendor_id: "v1".to_string(),
        vendor_name: "Test Vendor".to_string(),
        categories: vec![
            CatalogCategory {
                name: "ENVELOPE".to_string(),
                items: vec![item("e1", "E1", 100.0)],
            },
            CatalogCategory {
                name: "BASKET".to_string(),
                items: vec![item("b1", "Wood", 10.0), item("b2", "Steel", 12.0)],
            },
            CatalogCategory {
                name: "EXTRAS".to_string(),
                items: vec![item("x1", "Sticker Artwork", 3.0), item("x2", "Mouth tips", 2.0)],
            },
        ],
    };
    let behaviors = BehaviorTable {
        default: CategoryBehavior::Single,
        categories: HashMap::from([("EXTRAS".to_string(), CategoryBehavior::Multi)]),
    };
    let compatibility = CompatibilityTable {
        vendors: HashMap::from([(
            "v1".to_string(),
            HashMap::from([(
                "E1".to_string(),
                EnvelopeCompatibility {
                    baskets: BTreeSet::from(["Wood".to_string()]),
                    burners: BTreeSet::new(),
                },
            )]),
        )]),
    };
    Rc::new(CatalogAssets {
        catalog: CatalogData {
            vendors: vec![vendor],
        },
        behaviors,
        compatibility,
    })
}

#[test]
fn header_renders_language_picker() {
    orderbuilder_web::i18n::set_lang("en");
    let props = HeaderProps {
        current_lang: AttrValue::from("en"),
        on_lang_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("Deutsch"));
}

#[test]
fn order_builder_renders_every_category_with_its_mode() {
    orderbuilder_web::i18n::set_lang("en");
    let props = OrderBuilderProps {
        vendor_id: None,
        assets: Some(small_assets()),
    };
    let html = block_on(LocalServerRenderer::<OrderBuilder>::with_props(props).render());
    assert!(html.contains("Test Vendor"), "{html}");
    assert!(html.contains("Choose ENVELOPE"), "{html}");
    assert!(html.contains("Choose BASKET"), "{html}");
    assert!(html.contains("category-selector--multi"), "{html}");
    assert!(html.contains("Mouth tips"), "{html}");
    assert!(html.contains("Nothing selected yet."), "{html}");
}

#[test]
fn order_builder_reports_unknown_vendor() {
    orderbuilder_web::i18n::set_lang("en");
    let props = OrderBuilderProps {
        vendor_id: Some(AttrValue::from("missing")),
        assets: Some(small_assets()),
    };
    let html = block_on(LocalServerRenderer::<OrderBuilder>::with_props(props).render());
    assert!(html.contains("alert-error"), "{html}");
    assert!(html.contains("The catalog could not be loaded."), "{html}");
}

#[test]
fn german_locale_translates_builder_chrome() {
    orderbuilder_web::i18n::set_lang("de");
    let props = OrderBuilderProps {
        vendor_id: None,
        assets: Some(small_assets()),
    };
    let html = block_on(LocalServerRenderer::<OrderBuilder>::with_props(props).render());
    orderbuilder_web::i18n::set_lang("en");
    assert!(html.contains("ENVELOPE wählen"), "{html}");
    assert!(html.contains("Noch nichts ausgewählt."), "{html}");
}
