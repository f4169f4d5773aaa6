//! Category selector: a dropdown for single-select categories and a checklist
//! for multi-select ones.
//!
//! The selector never mutates selections. Every interaction resolves to at most
//! one `on_select` or `on_remove` call on the host.

mod handlers;
mod state;
mod view;


pub use state::CategorySelectorProps;

use self::view::{checklist::render_checklist, dropdown::render_dropdown};
use orderbuilder_catalog::{CategoryBehavior, SelectorView};
use yew::prelude::*;

#[function_component(CategorySelector)]
pub fn category_selector(props: &CategorySelectorProps) -> Html {
    let envelope = props.selected_envelope.as_deref();
    let view = SelectorView::build(
        &props.category,
        &props.vendor_id,
        envelope,
        &props.selected_items,
        props.classifier.as_ref(),
        props.compatibility.as_ref(),
    );
    let dispatch = handlers::event_dispatcher(props);

    match view.behavior {
        CategoryBehavior::Single => render_dropdown(&view, envelope.is_some(), &dispatch),
        CategoryBehavior::Multi | CategoryBehavior::MultiQty => render_checklist(&view, &dispatch),
    }
}
