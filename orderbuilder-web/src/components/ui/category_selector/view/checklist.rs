use super::super::handlers;
use super::render_description;
use crate::components::daisy_ui::{Checkbox, Input};
use crate::i18n;
use orderbuilder_catalog::{CatalogItem, CategoryBehavior, SelectedItem, SelectorEvent, SelectorView};
use yew::prelude::*;

/// Multi-select categories: one toggleable row per catalog item.
///
/// Rows list the whole category; the compatibility filter does not apply.
pub fn render_checklist(view: &SelectorView<'_>, dispatch: &Callback<SelectorEvent>) -> Html {
    let category_name = view.category.name.clone();
    html! {
        <section class="category-selector category-selector--multi" data-behavior={view.behavior.label()}>
            <h3 class="font-semibold">{ category_name.clone() }</h3>
            <ul class="category-selector__list" role="group" aria-label={category_name}>
                { for view.candidates().into_iter().map(|item| {
                    render_item_row(item, view.selected.get(&item.id), view.behavior, dispatch)
                })}
            </ul>
        </section>
    }
}

fn quantity_text(selected: &SelectedItem) -> String {
    if selected.quantity == 0 {
        String::new()
    } else {
        selected.quantity.to_string()
    }
}

/// A cleared price is recorded as 0 and shown blank.
fn price_text(selected: &SelectedItem) -> String {
    selected
        .custom_price
        .filter(|price| price.abs() > 0.0)
        .map(|price| price.to_string())
        .unwrap_or_default()
}

fn render_inputs(
    item: &CatalogItem,
    selected: &SelectedItem,
    behavior: CategoryBehavior,
    dispatch: &Callback<SelectorEvent>,
) -> Html {
    let quantity = behavior.tracks_quantity().then(|| {
        html! {
            <Input
                input_type="number"
                class={classes!("category-selector__quantity", "w-20")}
                min="1"
                step="1"
                aria_label={AttrValue::from(i18n::t("selector.quantity"))}
                value={AttrValue::from(quantity_text(selected))}
                oninput={handlers::quantity_input(dispatch, &item.id)}
                onblur={handlers::quantity_blur(dispatch, &item.id)}
            />
        }
    });
    let price = item.is_artwork().then(|| {
        html! {
            <Input
                input_type="number"
                class={classes!("category-selector__custom-price", "w-28")}
                min="0"
                step="0.01"
                aria_label={AttrValue::from(i18n::t("selector.custom_price"))}
                placeholder={AttrValue::from(i18n::t("selector.price_placeholder"))}
                value={AttrValue::from(price_text(selected))}
                oninput={handlers::price_input(dispatch, &item.id)}
            />
        }
    });
    html! {
        <div class="category-selector__inputs flex gap-2" onclick={handlers::stop_propagation()}>
            { quantity.unwrap_or_default() }
            { price.unwrap_or_default() }
        </div>
    }
}

fn render_item_row(
    item: &CatalogItem,
    selected: Option<&SelectedItem>,
    behavior: CategoryBehavior,
    dispatch: &Callback<SelectorEvent>,
) -> Html {
    let is_selected = selected.is_some();
    // Artwork never shows the catalog price; it is priced by the user.
    let price_label = (!item.is_artwork()).then(|| {
        html! { <span class="category-selector__price">{ i18n::fmt_price(item.price) }</span> }
    });
    let inputs = selected.map(|selected| render_inputs(item, selected, behavior, dispatch));
    let aria_checked = if is_selected { "true" } else { "false" };

    html! {
        <li
            class={classes!("category-selector__item", "flex", "items-start", "gap-3", is_selected.then_some("is-selected"))}
            role="checkbox"
            aria-checked={aria_checked}
            data-item-id={item.id.clone()}
            onclick={handlers::toggle(dispatch, &item.id)}
        >
            <Checkbox checked={is_selected} aria_label={AttrValue::from(item.name.clone())} />
            <div class="flex-1">
                <span class="category-selector__name">{ item.name.clone() }</span>
                { render_description(item) }
            </div>
            { price_label.unwrap_or_default() }
            { inputs.unwrap_or_default() }
        </li>
    }
}
