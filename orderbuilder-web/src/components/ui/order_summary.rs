//! Running order summary: one line per selection and the order total.
use crate::i18n;
use orderbuilder_catalog::{SelectedItem, SelectionMap, VendorCatalog};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct OrderSummaryProps {
    pub vendor: Rc<VendorCatalog>,
    pub selections: Rc<SelectionMap>,
    pub on_remove: Callback<String>,
}

impl PartialEq for OrderSummaryProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.vendor, &other.vendor)
            && Rc::ptr_eq(&self.selections, &other.selections)
            && self.on_remove == other.on_remove
    }
}

fn render_line(line: &SelectedItem, on_remove: &Callback<String>) -> Html {
    let item_id = line.id().to_string();
    let remove = on_remove.reform(move |_: MouseEvent| item_id.clone());
    html! {
        <tr data-item-id={line.id().to_string()}>
            <td>
                <span class="font-medium">{ line.item.name.clone() }</span>
                <span class="block text-xs opacity-70">{ line.category.clone() }</span>
            </td>
            <td class="text-right">{ line.quantity.to_string() }</td>
            <td class="text-right">{ i18n::fmt_price(line.unit_price()) }</td>
            <td class="text-right">{ i18n::fmt_price(line.line_total()) }</td>
            <td>
                <button class="btn btn-ghost btn-xs" aria-label={i18n::t("summary.remove")} onclick={remove}>
                    { "✕" }
                </button>
            </td>
        </tr>
    }
}

#[function_component(OrderSummary)]
pub fn order_summary(props: &OrderSummaryProps) -> Html {
    if props.selections.is_empty() {
        return html! {
            <aside class="order-summary card bg-base-100" aria-live="polite">
                <h2 class="card-title">{ i18n::t("summary.title") }</h2>
                <p class="order-summary__empty">{ i18n::t("summary.empty") }</p>
            </aside>
        };
    }

    let count = props.selections.len().to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    let lines = props.selections.lines_in_catalog_order(&props.vendor);

    html! {
        <aside class="order-summary card bg-base-100" aria-live="polite">
            <h2 class="card-title">{ i18n::t("summary.title") }</h2>
            <p class="order-summary__count">{ i18n::tr("summary.lines", Some(&args)) }</p>
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th></th>
                        <th class="text-right">{ i18n::t("summary.quantity") }</th>
                        <th></th>
                        <th></th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for lines.into_iter().map(|line| render_line(line, &props.on_remove)) }
                </tbody>
                <tfoot>
                    <tr>
                        <th colspan="3">{ i18n::t("summary.total") }</th>
                        <th class="order-summary__total text-right">
                            { i18n::fmt_price(props.selections.order_total()) }
                        </th>
                        <th></th>
                    </tr>
                </tfoot>
            </table>
        </aside>
    }
}
