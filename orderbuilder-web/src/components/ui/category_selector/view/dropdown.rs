use super::super::handlers;
use super::{render_description, slug};
use crate::components::daisy_ui::{Select, SelectOption};
use crate::i18n;
use orderbuilder_catalog::{SelectorEvent, SelectorView};
use std::collections::BTreeMap;
use yew::prelude::*;

/// Single-select categories: one dropdown over the compatible items.
pub fn render_dropdown(
    view: &SelectorView<'_>,
    filtering: bool,
    dispatch: &Callback<SelectorEvent>,
) -> Html {
    let category_name = view.category.name.as_str();
    let options: Vec<SelectOption> = view
        .filtered
        .iter()
        .map(|item| SelectOption {
            label: format!("{} ({})", item.name, i18n::fmt_price(item.price)).into(),
            value: AttrValue::from(item.id.clone()),
            disabled: false,
        })
        .collect();
    let current = view.single_selection();
    let mut args = BTreeMap::new();
    args.insert("category", category_name);
    let placeholder = i18n::tr("selector.choose", Some(&args));
    let select_id = format!("category-{}", slug(category_name));

    let empty_hint = (filtering && options.is_empty()).then(|| {
        html! {
            <p class="category-selector__hint text-warning" role="status">
                { i18n::t("selector.none_compatible") }
            </p>
        }
    });

    html! {
        <section class="category-selector category-selector--single" data-behavior={view.behavior.label()}>
            <label class="label" for={select_id.clone()}>
                <span class="label-text font-semibold">{ category_name.to_string() }</span>
            </label>
            <Select
                id={AttrValue::from(select_id)}
                options={options}
                value={current.map(|item| AttrValue::from(item.id.clone()))}
                placeholder={AttrValue::from(placeholder)}
                aria_label={AttrValue::from(category_name.to_string())}
                class={classes!("w-full")}
                on_change={handlers::pick(dispatch)}
            />
            { empty_hint.unwrap_or_default() }
            { current.map(render_description).unwrap_or_default() }
        </section>
    }
}
