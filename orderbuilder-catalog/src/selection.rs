//! Selected items and the caller-owned selection map.
use crate::behavior::CategoryBehavior;
use crate::catalog::{CatalogItem, VendorCatalog};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catalog item the user picked, annotated with its category.
///
/// This is also the payload of a select request: the category is injected
/// into the item before the request leaves the selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub category: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_price: Option<f64>,
}

impl SelectedItem {
    #[must_use]
    pub fn new(item: &CatalogItem, category: &str, quantity: u32, custom_price: Option<f64>) -> Self {
        Self {
            item: item.clone(),
            category: category.to_string(),
            quantity,
            custom_price,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Price of one unit: the custom price for artwork when set, otherwise the
    /// catalog price.
    #[must_use]
    pub fn unit_price(&self) -> f64 {
        match self.custom_price {
            Some(price) if self.item.is_artwork() => price,
            _ => self.item.price,
        }
    }

    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}

/// A mutation the selector asks its owner to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionRequest {
    /// Insert or replace the selection keyed by the item's ID.
    Select(SelectedItem),
    /// Drop the selection for this item ID.
    Remove(String),
}

impl SelectionRequest {
    #[must_use]
    pub fn item_id(&self) -> &str {
        match self {
            Self::Select(selected) => selected.id(),
            Self::Remove(id) => id,
        }
    }
}

/// Item ID → selection. Owned by the host; selectors only read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionMap {
    items: HashMap<String, SelectedItem>,
}

impl SelectionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, item_id: &str) -> Option<&SelectedItem> {
        self.items.get(item_id)
    }

    #[must_use]
    pub fn contains(&self, item_id: &str) -> bool {
        self.items.contains_key(item_id)
    }

    /// Quantity currently recorded for an item, `None` when unselected.
    #[must_use]
    pub fn quantity_of(&self, item_id: &str) -> Option<u32> {
        self.get(item_id).map(|selected| selected.quantity)
    }

    #[must_use]
    pub fn custom_price_of(&self, item_id: &str) -> Option<f64> {
        self.get(item_id).and_then(|selected| selected.custom_price)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedItem> {
        self.items.values()
    }

    /// Selections whose category matches `category_name`, ignoring case.
    pub fn selected_in_category<'a>(
        &'a self,
        category_name: &str,
    ) -> impl Iterator<Item = &'a SelectedItem> {
        self.items
            .values()
            .filter(move |selected| selected.category.eq_ignore_ascii_case(category_name))
    }

    /// Name of the item chosen in the envelope category, if any.
    #[must_use]
    pub fn envelope_name(&self, envelope_category: &str) -> Option<&str> {
        self.selected_in_category(envelope_category)
            .next()
            .map(|selected| selected.item.name.as_str())
    }

    /// Insert or replace a selection.
    pub fn upsert(&mut self, selected: SelectedItem) {
        self.items.insert(selected.item.id.clone(), selected);
    }

    /// Remove a selection, returning it if present.
    pub fn remove(&mut self, item_id: &str) -> Option<SelectedItem> {
        self.items.remove(item_id)
    }

    /// Apply a selector request the way the host owns it.
    ///
    /// In single-select categories a new pick replaces whatever else was
    /// chosen in the same category.
    pub fn apply(&mut self, request: SelectionRequest, behavior: CategoryBehavior) {
        match request {
            SelectionRequest::Select(selected) => {
                if behavior == CategoryBehavior::Single {
                    let category = selected.category.clone();
                    let id = selected.item.id.clone();
                    self.items.retain(|key, existing| {
                        *key == id || !existing.category.eq_ignore_ascii_case(&category)
                    });
                }
                self.upsert(selected);
            }
            SelectionRequest::Remove(id) => {
                self.remove(&id);
            }
        }
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn order_total(&self) -> f64 {
        self.items.values().map(SelectedItem::line_total).sum()
    }

    /// Selections ordered as the vendor's catalog lists them; selections that
    /// no longer appear in the catalog follow, sorted by ID.
    #[must_use]
    pub fn lines_in_catalog_order(&self, catalog: &VendorCatalog) -> Vec<&SelectedItem> {
        let mut lines: Vec<&SelectedItem> = catalog
            .categories
            .iter()
            .flat_map(|category| category.items.iter())
            .filter_map(|item| self.get(&item.id))
            .collect();
        let mut orphans: Vec<&SelectedItem> = self
            .items
            .values()
            .filter(|selected| catalog.find_item(selected.id()).is_none())
            .collect();
        orphans.sort_by(|a, b| a.id().cmp(b.id()));
        lines.extend(orphans);
        lines
    }
}
