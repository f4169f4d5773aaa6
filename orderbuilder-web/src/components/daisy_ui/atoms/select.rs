use crate::components::daisy_ui::foundation as f;
#[cfg(target_arch = "wasm32")]
use f::TargetCast;

#[derive(Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: f::AttrValue,
    pub value: f::AttrValue,
    pub disabled: bool,
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub value: Option<f::AttrValue>,
    /// Leading empty option shown while nothing is picked.
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub size: f::DaisySize,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<f::AttrValue>,
}

#[f::function_component(Select)]
pub fn select(props: &SelectProps) -> f::Html {
    let mut class = f::class_list(&["select", "select-bordered"], &props.class);
    class.push(props.size.class("select"));
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(sel) = e.target_dyn_into::<f::HtmlSelectElement>() {
                    cb.emit(sel.value().into());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };
    let current = props.value.clone().unwrap_or_default();
    let placeholder = props.placeholder.as_ref().map(|text| {
        f::html! { <option value="" selected={current.is_empty()}>{ text.clone() }</option> }
    });
    f::html! {
        <select
            id={f::attr_value(&props.id)}
            class={class}
            aria-label={f::attr_value(&props.aria_label)}
            value={current.clone()}
            disabled={props.disabled}
            onchange={on_change}
        >
            { placeholder.unwrap_or_default() }
            { for props.options.iter().map(|opt| {
                f::html! {
                    <option
                        value={opt.value.clone()}
                        selected={opt.value == current}
                        disabled={opt.disabled}
                    >
                        { opt.label.clone() }
                    </option>
                }
            })}
        </select>
    }
}
