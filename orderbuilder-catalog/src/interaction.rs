//! Translating selector interactions into selection requests.
//!
//! Every function here is pure: it reads the current selection snapshot and
//! returns at most one request for the owner to apply.
use crate::catalog::CatalogItem;
use crate::selection::{SelectedItem, SelectionMap, SelectionRequest};

/// Result of reading a numeric text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldInput<T> {
    /// The field was emptied.
    Clear,
    Value(T),
    /// Not a number; the edit is ignored.
    Invalid,
}

/// Read a quantity field. Only non-negative integers are accepted.
///
/// Negative input such as `"-2"` is treated as not-a-number and yields
/// [`FieldInput::Invalid`], so the edit is dropped rather than clamped.
#[must_use]
pub fn parse_quantity(raw: &str) -> FieldInput<u32> {
    if raw.is_empty() {
        return FieldInput::Clear;
    }
    raw.trim()
        .parse::<u32>()
        .map_or(FieldInput::Invalid, FieldInput::Value)
}

/// Read a price field. Only finite numbers are accepted.
#[must_use]
pub fn parse_price(raw: &str) -> FieldInput<f64> {
    if raw.is_empty() {
        return FieldInput::Clear;
    }
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => FieldInput::Value(price),
        _ => FieldInput::Invalid,
    }
}

/// Click or checkbox toggle on an item row.
#[must_use]
pub fn toggle_outcome(
    item: &CatalogItem,
    category_name: &str,
    selected: &SelectionMap,
) -> SelectionRequest {
    if selected.contains(&item.id) {
        SelectionRequest::Remove(item.id.clone())
    } else {
        SelectionRequest::Select(SelectedItem::new(item, category_name, 1, None))
    }
}

/// Dropdown pick in a single-select category.
///
/// `candidates` is the list the dropdown was built from; a value outside it
/// is ignored.
#[must_use]
pub fn single_pick_outcome(
    candidates: &[&CatalogItem],
    category_name: &str,
    picked_id: &str,
    selected: &SelectionMap,
) -> Option<SelectionRequest> {
    let Some(item) = candidates.iter().find(|item| item.id == picked_id) else {
        log::debug!("ignoring pick of unknown item {picked_id:?} in {category_name}");
        return None;
    };
    Some(toggle_outcome(item, category_name, selected))
}

/// Edit of the quantity field of a selected item.
///
/// Clearing the field records a transient quantity of 0; the blur handler
/// restores it to 1.
#[must_use]
pub fn quantity_input_outcome(
    item: &CatalogItem,
    category_name: &str,
    raw: &str,
    selected: &SelectionMap,
) -> Option<SelectionRequest> {
    let quantity = match parse_quantity(raw) {
        FieldInput::Clear => 0,
        FieldInput::Value(quantity) => quantity,
        FieldInput::Invalid => {
            log::debug!("ignoring non-numeric quantity {raw:?} for {}", item.id);
            return None;
        }
    };
    let custom_price = selected.custom_price_of(&item.id);
    Some(SelectionRequest::Select(SelectedItem::new(
        item,
        category_name,
        quantity,
        custom_price,
    )))
}

/// Quantity field lost focus: a non-positive quantity becomes 1.
#[must_use]
pub fn quantity_blur_outcome(
    item: &CatalogItem,
    category_name: &str,
    selected: &SelectionMap,
) -> Option<SelectionRequest> {
    let current = selected.get(&item.id)?;
    if current.quantity >= 1 {
        return None;
    }
    Some(SelectionRequest::Select(SelectedItem::new(
        item,
        category_name,
        1,
        current.custom_price,
    )))
}

/// Edit of the custom price field of an artwork item.
///
/// The quantity already on record is kept (1 when there is none). Clearing
/// the field records a price of 0.
#[must_use]
pub fn custom_price_input_outcome(
    item: &CatalogItem,
    category_name: &str,
    raw: &str,
    selected: &SelectionMap,
) -> Option<SelectionRequest> {
    if !item.is_artwork() {
        return None;
    }
    let price = match parse_price(raw) {
        FieldInput::Clear => 0.0,
        FieldInput::Value(price) => price,
        FieldInput::Invalid => {
            log::debug!("ignoring non-numeric price {raw:?} for {}", item.id);
            return None;
        }
    };
    let quantity = selected.quantity_of(&item.id).unwrap_or(1);
    Some(SelectionRequest::Select(SelectedItem::new(
        item,
        category_name,
        quantity,
        Some(price),
    )))
}
