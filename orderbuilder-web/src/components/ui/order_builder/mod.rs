//! Order builder host: owns the selection map and renders one selector per
//! category plus the running summary.

mod state;

pub use state::{BuilderModel, OrderBuilderProps, apply_request, selected_envelope};

use crate::components::daisy_ui::{Select, SelectOption};
use crate::components::ui::category_selector::CategorySelector;
use crate::components::ui::order_summary::OrderSummary;
use crate::i18n;
use orderbuilder_catalog::{SelectedItem, SelectionMap, SelectionRequest};
use std::rc::Rc;
use yew::prelude::*;

fn render_vendor_picker(model: &BuilderModel, on_change: Callback<AttrValue>) -> Html {
    let choices = model.vendor_choices();
    if choices.len() < 2 {
        return html! { <span class="order-builder__vendor">{ model.vendor.vendor_name.clone() }</span> };
    }
    let options: Vec<SelectOption> = choices
        .into_iter()
        .map(|(id, name)| SelectOption {
            label: name.into(),
            value: id.into(),
            disabled: false,
        })
        .collect();
    html! {
        <Select
            id={AttrValue::from("vendor-select")}
            options={options}
            value={Some(AttrValue::from(model.vendor.vendor_id.clone()))}
            aria_label={AttrValue::from(i18n::t("builder.vendor"))}
            on_change={on_change}
        />
    }
}

#[function_component(OrderBuilder)]
pub fn order_builder(props: &OrderBuilderProps) -> Html {
    let vendor_choice = use_state(|| props.vendor_id.clone());
    let selections = use_state(|| Rc::new(SelectionMap::new()));
    let model = use_memo(
        (props.assets.clone(), (*vendor_choice).clone()),
        |(assets, vendor_id)| state::load_model(assets.clone(), vendor_id.as_deref()),
    );

    let model = match &*model {
        Ok(model) => model,
        Err(err) => {
            log::error!("failed to load the catalog: {err}");
            return html! {
                <div class="alert alert-error" role="alert">{ i18n::t("builder.load_error") }</div>
            };
        }
    };

    let on_select = {
        let selections = selections.clone();
        let classifier = model.classifier.clone();
        Callback::from(move |selected: SelectedItem| {
            let behavior = classifier.classify(&selected.category);
            selections.set(apply_request(
                &selections,
                SelectionRequest::Select(selected),
                behavior,
            ));
        })
    };
    let on_remove = {
        let selections = selections.clone();
        Callback::from(move |item_id: String| {
            let mut next = (**selections).clone();
            if next.remove(&item_id).is_some() {
                selections.set(Rc::new(next));
            }
        })
    };
    let on_vendor_change = {
        let vendor_choice = vendor_choice.clone();
        let selections = selections.clone();
        Callback::from(move |vendor_id: AttrValue| {
            log::info!("switching vendor to {vendor_id}");
            selections.set(Rc::new(SelectionMap::new()));
            vendor_choice.set(Some(vendor_id));
        })
    };

    let snapshot: Rc<SelectionMap> = (*selections).clone();
    let envelope = selected_envelope(&snapshot);
    let vendor_id = AttrValue::from(model.vendor.vendor_id.clone());

    html! {
        <main id="main" class="order-builder container mx-auto p-4">
            <div class="order-builder__toolbar flex items-center gap-2 mb-4">
                <span class="font-semibold">{ i18n::t("builder.vendor") }</span>
                { render_vendor_picker(model, on_vendor_change) }
            </div>
            <div class="order-builder__grid grid gap-6 lg:grid-cols-3">
                <div class="order-builder__categories lg:col-span-2 flex flex-col gap-4">
                    { for model.categories.iter().map(|category| html! {
                        <CategorySelector
                            key={category.name.clone()}
                            category={category.clone()}
                            selected_items={snapshot.clone()}
                            selected_envelope={envelope.clone()}
                            vendor_id={vendor_id.clone()}
                            on_select={on_select.clone()}
                            on_remove={on_remove.clone()}
                            classifier={model.classifier.clone()}
                            compatibility={model.compatibility.clone()}
                        />
                    })}
                </div>
                <OrderSummary
                    vendor={model.vendor.clone()}
                    selections={snapshot.clone()}
                    on_remove={on_remove.clone()}
                />
            </div>
        </main>
    }
}
