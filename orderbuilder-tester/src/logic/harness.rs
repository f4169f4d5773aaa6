//! Drives category selectors the way the web host does, without a browser.
use anyhow::{Result, anyhow};
use orderbuilder_catalog::{
    BehaviorClassifier, CatalogAssets, CatalogCategory, CategoryBehavior, ENVELOPE_CATEGORY,
    SelectionMap, SelectionRequest, SelectorEvent, SelectorView, VendorCatalog,
};
use serde::Serialize;

/// One host callback the selector asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "callback", rename_all = "snake_case")]
pub enum CallbackRecord {
    Select {
        item_id: String,
        category: String,
        quantity: u32,
        custom_price: Option<f64>,
    },
    Remove {
        item_id: String,
    },
}

impl From<&SelectionRequest> for CallbackRecord {
    fn from(request: &SelectionRequest) -> Self {
        match request {
            SelectionRequest::Select(selected) => Self::Select {
                item_id: selected.id().to_string(),
                category: selected.category.clone(),
                quantity: selected.quantity,
                custom_price: selected.custom_price,
            },
            SelectionRequest::Remove(item_id) => Self::Remove {
                item_id: item_id.clone(),
            },
        }
    }
}

pub struct SelectorHarness<'a> {
    assets: &'a CatalogAssets,
    vendor: &'a VendorCatalog,
    selections: SelectionMap,
    callbacks: Vec<CallbackRecord>,
}

impl<'a> SelectorHarness<'a> {
    pub fn new(assets: &'a CatalogAssets, vendor: &'a VendorCatalog) -> Self {
        Self {
            assets,
            vendor,
            selections: SelectionMap::new(),
            callbacks: Vec::new(),
        }
    }

    pub const fn vendor(&self) -> &'a VendorCatalog {
        self.vendor
    }

    pub const fn assets(&self) -> &'a CatalogAssets {
        self.assets
    }

    pub const fn selections(&self) -> &SelectionMap {
        &self.selections
    }

    pub fn callbacks(&self) -> &[CallbackRecord] {
        &self.callbacks
    }

    pub fn behavior(&self, category: &CatalogCategory) -> CategoryBehavior {
        self.assets.behaviors.classify(&category.name)
    }

    pub fn category(&self, name: &str) -> Result<&'a CatalogCategory> {
        self.vendor
            .find_category(name)
            .ok_or_else(|| anyhow!("{} has no {name} category", self.vendor.vendor_id))
    }

    /// First category whose behavior satisfies `pred`.
    pub fn category_where(
        &self,
        pred: impl Fn(CategoryBehavior) -> bool,
    ) -> Option<&'a CatalogCategory> {
        self.vendor
            .categories
            .iter()
            .find(|category| pred(self.behavior(category)))
    }

    pub fn envelope(&self) -> Option<&str> {
        self.selections.envelope_name(ENVELOPE_CATEGORY)
    }

    fn view<'s>(&'s self, category: &'s CatalogCategory) -> SelectorView<'s> {
        SelectorView::build(
            category,
            &self.vendor.vendor_id,
            self.envelope(),
            &self.selections,
            &self.assets.behaviors,
            &self.assets.compatibility,
        )
    }

    /// IDs the selector currently offers for `category`.
    pub fn offered(&self, category: &CatalogCategory) -> Vec<String> {
        self.view(category)
            .candidates()
            .into_iter()
            .map(|item| item.id.clone())
            .collect()
    }

    /// IDs that pass the compatibility filter, whatever the mode.
    pub fn filtered(&self, category: &CatalogCategory) -> Vec<String> {
        self.view(category)
            .filtered
            .iter()
            .map(|item| item.id.clone())
            .collect()
    }

    /// Send one interaction and apply the resulting request, if any.
    pub fn send(&mut self, category: &CatalogCategory, event: SelectorEvent) -> Option<CallbackRecord> {
        let request = self.view(category).handle(&event);
        let Some(request) = request else {
            log::debug!("{}: {event:?} produced no callback", category.name);
            return None;
        };
        let record = CallbackRecord::from(&request);
        let behavior = self.behavior(category);
        self.selections.apply(request, behavior);
        self.callbacks.push(record.clone());
        Some(record)
    }

    pub fn toggle(&mut self, category: &CatalogCategory, item_id: &str) -> Option<CallbackRecord> {
        self.send(
            category,
            SelectorEvent::Toggle {
                item_id: item_id.to_string(),
            },
        )
    }

    pub fn pick(&mut self, category: &CatalogCategory, item_id: &str) -> Option<CallbackRecord> {
        self.send(
            category,
            SelectorEvent::Pick {
                item_id: item_id.to_string(),
            },
        )
    }

    pub fn type_quantity(
        &mut self,
        category: &CatalogCategory,
        item_id: &str,
        raw: &str,
    ) -> Option<CallbackRecord> {
        self.send(
            category,
            SelectorEvent::QuantityInput {
                item_id: item_id.to_string(),
                raw: raw.to_string(),
            },
        )
    }

    pub fn blur_quantity(&mut self, category: &CatalogCategory, item_id: &str) -> Option<CallbackRecord> {
        self.send(
            category,
            SelectorEvent::QuantityBlur {
                item_id: item_id.to_string(),
            },
        )
    }

    pub fn type_price(
        &mut self,
        category: &CatalogCategory,
        item_id: &str,
        raw: &str,
    ) -> Option<CallbackRecord> {
        self.send(
            category,
            SelectorEvent::PriceInput {
                item_id: item_id.to_string(),
                raw: raw.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderbuilder_catalog::{EmbeddedDataLoader, load_assets};

    #[test]
    fn envelope_pick_narrows_baskets() {
        let assets = load_assets(&EmbeddedDataLoader).expect("embedded data");
        let vendor = assets.vendor("smokehaus").expect("vendor");
        let mut harness = SelectorHarness::new(&assets, vendor);
        let envelopes = harness.category(ENVELOPE_CATEGORY).expect("envelopes");
        let baskets = harness.category("BASKET").expect("baskets");

        assert_eq!(harness.offered(baskets).len(), baskets.items.len());
        let record = harness.pick(envelopes, "sh-env-travel");
        assert!(matches!(record, Some(CallbackRecord::Select { quantity: 1, .. })));
        assert_eq!(harness.envelope(), Some("Travel"));
        assert!(harness.offered(baskets).is_empty());
        assert_eq!(harness.callbacks().len(), 1);
    }

    #[test]
    fn ignored_events_are_not_recorded() {
        let assets = load_assets(&EmbeddedDataLoader).expect("embedded data");
        let vendor = assets.vendor("smokehaus").expect("vendor");
        let mut harness = SelectorHarness::new(&assets, vendor);
        let coal = harness.category("COAL").expect("coal");
        assert!(harness.type_quantity(coal, "sh-coal-flat", "x").is_none());
        assert!(harness.callbacks().is_empty());
    }

    #[test]
    fn callback_records_serialize_with_tag() {
        let record = CallbackRecord::Remove {
            item_id: "b1".to_string(),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"callback":"remove","item_id":"b1"}"#);
    }
}
