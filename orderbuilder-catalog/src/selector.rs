//! Per-render view of one category selector.
use crate::behavior::{BehaviorClassifier, CategoryBehavior};
use crate::catalog::{CatalogCategory, CatalogItem};
use crate::compat::{CompatibilityLookup, filter_items};
use crate::interaction::{
    custom_price_input_outcome, quantity_blur_outcome, quantity_input_outcome,
    single_pick_outcome, toggle_outcome,
};
use crate::selection::{SelectionMap, SelectionRequest};
use serde::{Deserialize, Serialize};

/// A user interaction with a category selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectorEvent {
    /// Row click or checkbox toggle.
    Toggle { item_id: String },
    /// Dropdown choice (single-select categories).
    Pick { item_id: String },
    QuantityInput { item_id: String, raw: String },
    QuantityBlur { item_id: String },
    PriceInput { item_id: String, raw: String },
}

/// Snapshot of everything a selector needs for one render.
///
/// The compatibility filter always runs, but only the single-select
/// dropdown offers the filtered list. Checklists show every item of the
/// category.
#[derive(Debug, Clone)]
pub struct SelectorView<'a> {
    pub category: &'a CatalogCategory,
    pub behavior: CategoryBehavior,
    pub filtered: Vec<&'a CatalogItem>,
    pub selected: &'a SelectionMap,
}

impl<'a> SelectorView<'a> {
    pub fn build<B, C>(
        category: &'a CatalogCategory,
        vendor_id: &str,
        selected_envelope: Option<&str>,
        selected: &'a SelectionMap,
        classifier: &B,
        lookup: &C,
    ) -> Self
    where
        B: BehaviorClassifier + ?Sized,
        C: CompatibilityLookup + ?Sized,
    {
        Self {
            category,
            behavior: classifier.classify(&category.name),
            filtered: filter_items(category, vendor_id, selected_envelope, lookup),
            selected,
        }
    }

    /// Items the current mode offers.
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a CatalogItem> {
        match self.behavior {
            CategoryBehavior::Single => self.filtered.clone(),
            CategoryBehavior::Multi | CategoryBehavior::MultiQty => {
                self.category.items.iter().collect()
            }
        }
    }

    /// The dropdown's current value in single-select mode.
    #[must_use]
    pub fn single_selection(&self) -> Option<&'a CatalogItem> {
        self.filtered
            .iter()
            .copied()
            .find(|item| self.selected.contains(&item.id))
    }

    fn candidate(&self, item_id: &str) -> Option<&'a CatalogItem> {
        self.candidates().into_iter().find(|item| item.id == item_id)
    }

    /// Resolve an interaction to at most one request.
    #[must_use]
    pub fn handle(&self, event: &SelectorEvent) -> Option<SelectionRequest> {
        let category_name = self.category.name.as_str();
        match event {
            SelectorEvent::Pick { item_id } => {
                if self.behavior != CategoryBehavior::Single {
                    return None;
                }
                single_pick_outcome(&self.filtered, category_name, item_id, self.selected)
            }
            SelectorEvent::Toggle { item_id } => self
                .candidate(item_id)
                .map(|item| toggle_outcome(item, category_name, self.selected)),
            SelectorEvent::QuantityInput { item_id, raw } => {
                if !self.behavior.tracks_quantity() {
                    return None;
                }
                let item = self.candidate(item_id)?;
                quantity_input_outcome(item, category_name, raw, self.selected)
            }
            SelectorEvent::QuantityBlur { item_id } => {
                if !self.behavior.tracks_quantity() {
                    return None;
                }
                let item = self.candidate(item_id)?;
                quantity_blur_outcome(item, category_name, self.selected)
            }
            SelectorEvent::PriceInput { item_id, raw } => {
                if !self.behavior.is_multi() {
                    return None;
                }
                let item = self.candidate(item_id)?;
                custom_price_input_outcome(item, category_name, raw, self.selected)
            }
        }
    }
}
