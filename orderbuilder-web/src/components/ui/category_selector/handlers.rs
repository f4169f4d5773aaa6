use super::state::CategorySelectorProps;
use orderbuilder_catalog::{SelectedItem, SelectionRequest, SelectorEvent, SelectorView};
use yew::prelude::*;

/// Forward a resolved request to the matching host callback.
pub(super) fn emit_request(
    request: SelectionRequest,
    on_select: &Callback<SelectedItem>,
    on_remove: &Callback<String>,
) {
    match request {
        SelectionRequest::Select(selected) => on_select.emit(selected),
        SelectionRequest::Remove(item_id) => on_remove.emit(item_id),
    }
}

/// Callback that resolves selector events against this render's props.
///
/// Each event yields at most one host callback; ignored events yield none.
pub(super) fn event_dispatcher(props: &CategorySelectorProps) -> Callback<SelectorEvent> {
    let props = props.clone();
    Callback::from(move |event: SelectorEvent| {
        let envelope = props.selected_envelope.as_deref();
        let view = SelectorView::build(
            &props.category,
            &props.vendor_id,
            envelope,
            &props.selected_items,
            props.classifier.as_ref(),
            props.compatibility.as_ref(),
        );
        match view.handle(&event) {
            Some(request) => emit_request(request, &props.on_select, &props.on_remove),
            None => log::debug!("{} ignored {event:?}", props.category.name),
        }
    })
}

pub(super) fn toggle(dispatch: &Callback<SelectorEvent>, item_id: &str) -> Callback<MouseEvent> {
    let item_id = item_id.to_string();
    dispatch.reform(move |_: MouseEvent| SelectorEvent::Toggle {
        item_id: item_id.clone(),
    })
}

pub(super) fn pick(dispatch: &Callback<SelectorEvent>) -> Callback<AttrValue> {
    dispatch.reform(|value: AttrValue| SelectorEvent::Pick {
        item_id: value.to_string(),
    })
}

pub(super) fn quantity_input(dispatch: &Callback<SelectorEvent>, item_id: &str) -> Callback<String> {
    let item_id = item_id.to_string();
    dispatch.reform(move |raw: String| SelectorEvent::QuantityInput {
        item_id: item_id.clone(),
        raw,
    })
}

pub(super) fn quantity_blur(dispatch: &Callback<SelectorEvent>, item_id: &str) -> Callback<()> {
    let item_id = item_id.to_string();
    dispatch.reform(move |()| SelectorEvent::QuantityBlur {
        item_id: item_id.clone(),
    })
}

pub(super) fn price_input(dispatch: &Callback<SelectorEvent>, item_id: &str) -> Callback<String> {
    let item_id = item_id.to_string();
    dispatch.reform(move |raw: String| SelectorEvent::PriceInput {
        item_id: item_id.clone(),
        raw,
    })
}

/// Keeps clicks inside a row's inputs from toggling the row.
pub(super) fn stop_propagation() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| e.stop_propagation())
}
