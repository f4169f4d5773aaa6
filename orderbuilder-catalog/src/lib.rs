//! Order Builder catalog engine
//!
//! Platform-agnostic logic behind the order builder's category selectors:
//! the catalog model, category behavior classification, envelope
//! compatibility filtering and the selection request protocol.
//! This crate has no UI or platform-specific dependencies.

pub mod behavior;
pub mod catalog;
pub mod compat;
pub mod data;
pub mod interaction;
pub mod selection;
pub mod selector;

// Re-export commonly used types
pub use behavior::{BehaviorClassifier, BehaviorTable, CategoryBehavior};
pub use catalog::{
    ARTWORK_MARKER, CatalogCategory, CatalogData, CatalogItem, VendorCatalog, is_artwork_name,
};
pub use compat::{
    CompatibilityLookup, CompatibilityTable, EnvelopeCompatibility, FilterRule, filter_items,
};
pub use data::{
    CatalogAssets, DataError, DataLoader, ENVELOPE_CATEGORY, EmbeddedDataLoader, load_assets,
};
pub use interaction::{
    FieldInput, custom_price_input_outcome, parse_price, parse_quantity, quantity_blur_outcome,
    quantity_input_outcome, single_pick_outcome, toggle_outcome,
};
pub use selection::{SelectedItem, SelectionMap, SelectionRequest};
pub use selector::{SelectorEvent, SelectorView};
