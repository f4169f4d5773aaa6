pub mod checklist;
pub mod dropdown;

use orderbuilder_catalog::CatalogItem;
use yew::prelude::*;

use crate::i18n;

/// DOM id fragment for a category name.
pub(super) fn slug(category_name: &str) -> String {
    category_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

pub(super) fn render_description(item: &CatalogItem) -> Html {
    let placeholder = i18n::t("selector.no_description");
    let missing = item.description_or("").is_empty();
    html! {
        <p class={classes!("category-selector__description", missing.then_some("is-placeholder"))}>
            { item.description_or(&placeholder).to_string() }
        </p>
    }
}
