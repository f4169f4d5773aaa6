//! Scripted selector runs. Each scenario works against whatever vendor it is
//! handed and finds its categories by behavior, not by name.
use anyhow::{Context, Result, bail, ensure};
use orderbuilder_catalog::{
    CatalogCategory, CatalogItem, CategoryBehavior, CompatibilityLookup, ENVELOPE_CATEGORY,
    FilterRule,
};
use std::collections::BTreeSet;

use super::harness::{CallbackRecord, SelectorHarness};

pub type ScenarioFn = fn(&mut SelectorHarness<'_>) -> Result<()>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    pub run: ScenarioFn,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "smoke",
        description: "Catalog loads and every category is classified",
        run: smoke,
    },
    Scenario {
        key: "unfiltered-without-envelope",
        description: "No envelope chosen: every category offers all items",
        run: unfiltered_without_envelope,
    },
    Scenario {
        key: "envelope-filter",
        description: "Baskets and burners narrow to each envelope's compatibility list",
        run: envelope_filter,
    },
    Scenario {
        key: "incompatible-pick-ignored",
        description: "Picking a basket the envelope excludes sends no callback",
        run: incompatible_pick_ignored,
    },
    Scenario {
        key: "toggle-select-remove",
        description: "Checklist toggles select with quantity 1, then remove",
        run: toggle_select_remove,
    },
    Scenario {
        key: "single-replace",
        description: "A single-select pick replaces the previous one; re-picking clears it",
        run: single_replace,
    },
    Scenario {
        key: "quantity-blur",
        description: "Cleared or zero quantities become 1 when the field loses focus",
        run: quantity_blur,
    },
    Scenario {
        key: "non-numeric-ignored",
        description: "Non-numeric quantity and price edits send nothing",
        run: non_numeric_ignored,
    },
    Scenario {
        key: "artwork-pricing",
        description: "Artwork takes a custom price that drives the order total",
        run: artwork_pricing,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description))
}

#[must_use]
pub fn find_scenario(key: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.key == key)
}

pub fn scenario_keys() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.key.to_string()).collect()
}

fn ids(items: &[CatalogItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

fn first_item(category: &CatalogCategory) -> Result<&CatalogItem> {
    category
        .items
        .first()
        .with_context(|| format!("{} has no items", category.name))
}

fn expect_select(record: Option<CallbackRecord>, what: &str) -> Result<(u32, Option<f64>)> {
    match record {
        Some(CallbackRecord::Select {
            quantity,
            custom_price,
            ..
        }) => Ok((quantity, custom_price)),
        other => bail!("{what}: expected a select callback, got {other:?}"),
    }
}

fn smoke(h: &mut SelectorHarness<'_>) -> Result<()> {
    let vendor = h.vendor();
    ensure!(
        !vendor.categories.is_empty(),
        "{} lists no categories",
        vendor.vendor_id
    );
    h.category(ENVELOPE_CATEGORY)?;

    let mut seen = BTreeSet::new();
    for category in &vendor.categories {
        log::info!(
            "{}/{}: {} ({} items)",
            vendor.vendor_id,
            category.name,
            h.behavior(category).label(),
            category.items.len()
        );
        for item in &category.items {
            ensure!(seen.insert(item.id.as_str()), "duplicate item id {}", item.id);
            ensure!(item.price.is_finite(), "{} has a non-finite price", item.id);
        }
    }
    Ok(())
}

fn unfiltered_without_envelope(h: &mut SelectorHarness<'_>) -> Result<()> {
    ensure!(h.envelope().is_none(), "fresh harness has an envelope");
    for category in &h.vendor().categories {
        ensure!(
            h.offered(category) == ids(&category.items),
            "{} is filtered without an envelope",
            category.name
        );
    }
    Ok(())
}

fn expected_names(h: &SelectorHarness<'_>, rule: FilterRule, envelope: &str) -> BTreeSet<String> {
    let table = &h.assets().compatibility;
    let vendor_id = &h.vendor().vendor_id;
    match rule {
        FilterRule::Basket => table.compatible_baskets(vendor_id, envelope),
        FilterRule::Burner => table.compatible_burners(vendor_id, envelope),
        FilterRule::Unfiltered => BTreeSet::new(),
    }
}

fn envelope_filter(h: &mut SelectorHarness<'_>) -> Result<()> {
    let envelopes = h.category(ENVELOPE_CATEGORY)?;
    for envelope in &envelopes.items {
        if h.envelope() != Some(envelope.name.as_str()) {
            expect_select(h.pick(envelopes, &envelope.id), "envelope pick")?;
        }
        ensure!(
            h.envelope() == Some(envelope.name.as_str()),
            "envelope {} not recorded",
            envelope.name
        );

        for category in &h.vendor().categories {
            let rule = FilterRule::for_category(&category.name);
            let expected: Vec<String> = match rule {
                FilterRule::Unfiltered => ids(&category.items),
                FilterRule::Basket | FilterRule::Burner => {
                    let allowed = expected_names(h, rule, &envelope.name);
                    category
                        .items
                        .iter()
                        .filter(|item| allowed.contains(&item.name))
                        .map(|item| item.id.clone())
                        .collect()
                }
            };
            ensure!(
                h.filtered(category) == expected,
                "{} with envelope {}: expected {expected:?}, got {:?}",
                category.name,
                envelope.name,
                h.filtered(category)
            );
            if h.behavior(category).is_multi() {
                ensure!(
                    h.offered(category) == ids(&category.items),
                    "checklist {} should stay unfiltered",
                    category.name
                );
            }
        }
    }
    Ok(())
}

fn incompatible_pick_ignored(h: &mut SelectorHarness<'_>) -> Result<()> {
    let envelopes = h.category(ENVELOPE_CATEGORY)?;
    let Ok(baskets) = h.category("BASKET") else {
        log::info!("{} has no baskets; nothing to check", h.vendor().vendor_id);
        return Ok(());
    };
    if h.behavior(baskets) != CategoryBehavior::Single {
        return Ok(());
    }

    for envelope in &envelopes.items {
        let allowed = expected_names(h, FilterRule::Basket, &envelope.name);
        let Some(excluded) = baskets.items.iter().find(|b| !allowed.contains(&b.name)) else {
            continue;
        };
        if h.envelope() != Some(envelope.name.as_str()) {
            expect_select(h.pick(envelopes, &envelope.id), "envelope pick")?;
        }
        let before = h.callbacks().len();
        let record = h.pick(baskets, &excluded.id);
        ensure!(
            record.is_none(),
            "{} should not be pickable with {}: {record:?}",
            excluded.name,
            envelope.name
        );
        ensure!(h.callbacks().len() == before, "callback recorded for ignored pick");
        ensure!(!h.selections().contains(&excluded.id), "{} was selected", excluded.id);
        return Ok(());
    }

    log::info!(
        "{}: every envelope accepts every basket",
        h.vendor().vendor_id
    );
    Ok(())
}

fn toggle_select_remove(h: &mut SelectorHarness<'_>) -> Result<()> {
    let category = h
        .category_where(CategoryBehavior::is_multi)
        .context("no checklist category")?;

    for item in &category.items {
        let (quantity, custom_price) = expect_select(h.toggle(category, &item.id), "first toggle")?;
        ensure!(quantity == 1, "{} selected with quantity {quantity}", item.id);
        ensure!(
            custom_price.is_none(),
            "{} selected with a custom price",
            item.id
        );
    }
    ensure!(
        h.selections().len() == category.items.len(),
        "checklist allows several selections"
    );

    for item in &category.items {
        let record = h.toggle(category, &item.id);
        ensure!(
            record
                == Some(CallbackRecord::Remove {
                    item_id: item.id.clone()
                }),
            "second toggle of {} gave {record:?}",
            item.id
        );
    }
    ensure!(h.selections().is_empty(), "selections left after removal");
    Ok(())
}

fn single_replace(h: &mut SelectorHarness<'_>) -> Result<()> {
    let envelopes = h.category(ENVELOPE_CATEGORY)?;
    ensure!(
        h.behavior(envelopes) == CategoryBehavior::Single,
        "envelopes must be single-select"
    );
    let [first, second, ..] = envelopes.items.as_slice() else {
        log::info!("{} has a single envelope", h.vendor().vendor_id);
        return Ok(());
    };

    expect_select(h.pick(envelopes, &first.id), "first pick")?;
    expect_select(h.pick(envelopes, &second.id), "second pick")?;
    let in_category = h
        .selections()
        .selected_in_category(&envelopes.name)
        .count();
    ensure!(in_category == 1, "{in_category} envelopes selected at once");
    ensure!(h.envelope() == Some(second.name.as_str()), "replacement not kept");

    let record = h.pick(envelopes, &second.id);
    ensure!(
        matches!(record, Some(CallbackRecord::Remove { .. })),
        "re-pick should clear, got {record:?}"
    );
    ensure!(h.envelope().is_none(), "envelope left after clearing");

    ensure!(h.pick(envelopes, "").is_none(), "placeholder pick sent a callback");
    Ok(())
}

fn quantity_blur(h: &mut SelectorHarness<'_>) -> Result<()> {
    let category = h
        .category_where(CategoryBehavior::tracks_quantity)
        .context("no quantity category")?;
    let item = first_item(category)?;

    expect_select(h.toggle(category, &item.id), "toggle")?;

    let (quantity, _) = expect_select(h.type_quantity(category, &item.id, ""), "clear")?;
    ensure!(quantity == 0, "cleared field recorded {quantity}");
    let (quantity, _) = expect_select(h.blur_quantity(category, &item.id), "blur")?;
    ensure!(quantity == 1, "blur restored {quantity}");

    let (quantity, _) = expect_select(h.type_quantity(category, &item.id, "0"), "zero")?;
    ensure!(quantity == 0, "zero recorded as {quantity}");
    expect_select(h.blur_quantity(category, &item.id), "blur after zero")?;

    let (quantity, _) = expect_select(h.type_quantity(category, &item.id, "5"), "five")?;
    ensure!(quantity == 5, "five recorded as {quantity}");
    ensure!(
        h.blur_quantity(category, &item.id).is_none(),
        "blur on a valid quantity sent a callback"
    );
    ensure!(
        h.selections().quantity_of(&item.id) == Some(5),
        "quantity not kept"
    );
    Ok(())
}

fn non_numeric_ignored(h: &mut SelectorHarness<'_>) -> Result<()> {
    let category = h
        .category_where(CategoryBehavior::tracks_quantity)
        .context("no quantity category")?;
    let item = first_item(category)?;
    expect_select(h.toggle(category, &item.id), "toggle")?;

    let before = h.callbacks().len();
    for raw in ["abc", "1.5", "-2"] {
        ensure!(
            h.type_quantity(category, &item.id, raw).is_none(),
            "quantity {raw:?} was accepted"
        );
    }
    ensure!(h.callbacks().len() == before, "ignored edits were recorded");
    ensure!(
        h.selections().quantity_of(&item.id) == Some(1),
        "ignored edit changed the quantity"
    );

    if let Some((artwork_category, artwork)) = artwork_item(h) {
        for raw in ["twelve", "NaN"] {
            ensure!(
                h.type_price(artwork_category, &artwork.id, raw).is_none(),
                "price {raw:?} was accepted"
            );
        }
    }
    Ok(())
}

fn artwork_item<'a>(h: &SelectorHarness<'a>) -> Option<(&'a CatalogCategory, &'a CatalogItem)> {
    h.vendor()
        .categories
        .iter()
        .filter(|category| h.behavior(category).is_multi())
        .find_map(|category| {
            category
                .items
                .iter()
                .find(|item| item.is_artwork())
                .map(|item| (category, item))
        })
}

fn artwork_pricing(h: &mut SelectorHarness<'_>) -> Result<()> {
    let Some((category, artwork)) = artwork_item(h) else {
        bail!("no artwork item in a checklist category");
    };

    let (quantity, price) = expect_select(h.toggle(category, &artwork.id), "toggle")?;
    ensure!(quantity == 1 && price.is_none(), "artwork toggled as {quantity}/{price:?}");

    let (_, price) = expect_select(h.type_price(category, &artwork.id, "49.50"), "price")?;
    ensure!(price == Some(49.5), "price recorded as {price:?}");

    if h.behavior(category).tracks_quantity() {
        let (quantity, price) =
            expect_select(h.type_quantity(category, &artwork.id, "3"), "quantity")?;
        ensure!(quantity == 3, "quantity recorded as {quantity}");
        ensure!(price == Some(49.5), "quantity edit dropped the price");
    }

    let total = h.selections().order_total();
    let quantity = h.selections().quantity_of(&artwork.id).unwrap_or(0);
    let expected = 49.5 * f64::from(quantity);
    ensure!(
        (total - expected).abs() < 1e-9,
        "order total {total} should use the custom price ({expected})"
    );

    let (_, price) = expect_select(h.type_price(category, &artwork.id, ""), "clear price")?;
    ensure!(price == Some(0.0), "cleared price recorded as {price:?}");
    ensure!(
        h.selections().order_total().abs() < 1e-9,
        "cleared price still counts"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderbuilder_catalog::{EmbeddedDataLoader, load_assets};

    #[test]
    fn keys_are_unique() {
        let keys = scenario_keys();
        let unique: BTreeSet<&String> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
        assert!(find_scenario("smoke").is_some());
        assert!(find_scenario("nope").is_none());
    }

    #[test]
    fn every_scenario_passes_for_every_embedded_vendor() {
        let assets = load_assets(&EmbeddedDataLoader).expect("embedded data");
        for vendor in &assets.catalog.vendors {
            for scenario in SCENARIOS {
                let mut harness = SelectorHarness::new(&assets, vendor);
                if let Err(err) = (scenario.run)(&mut harness) {
                    panic!("{} failed for {}: {err:#}", scenario.key, vendor.vendor_id);
                }
            }
        }
    }
}
