//! Category behavior classification.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a category is presented and interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryBehavior {
    /// One item at a time, chosen from a dropdown.
    #[default]
    Single,
    /// Any number of items, toggled independently.
    Multi,
    /// Like `Multi`, with a quantity per selected item.
    MultiQty,
}

impl CategoryBehavior {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
            Self::MultiQty => "multi-qty",
        }
    }

    /// Whether the category renders as a checklist.
    #[must_use]
    pub const fn is_multi(self) -> bool {
        matches!(self, Self::Multi | Self::MultiQty)
    }

    #[must_use]
    pub const fn tracks_quantity(self) -> bool {
        matches!(self, Self::MultiQty)
    }
}

/// Maps a category name to its behavior.
pub trait BehaviorClassifier {
    fn classify(&self, category_name: &str) -> CategoryBehavior;
}

impl<F> BehaviorClassifier for F
where
    F: Fn(&str) -> CategoryBehavior,
{
    fn classify(&self, category_name: &str) -> CategoryBehavior {
        self(category_name)
    }
}

/// Data-driven classifier loaded from `behaviors.json`.
///
/// Category keys are matched without regard to case; anything not listed
/// falls back to `default`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorTable {
    #[serde(default)]
    pub default: CategoryBehavior,
    #[serde(default)]
    pub categories: HashMap<String, CategoryBehavior>,
}

impl BehaviorTable {
    /// Parse a behavior table from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown behavior.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl BehaviorClassifier for BehaviorTable {
    fn classify(&self, category_name: &str) -> CategoryBehavior {
        self.categories
            .iter()
            .find_map(|(name, behavior)| name.eq_ignore_ascii_case(category_name).then_some(*behavior))
            .unwrap_or(self.default)
    }
}
