use crate::components::header::Header;
use crate::components::ui::order_builder::OrderBuilder;
use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub vendor_id: Option<AttrValue>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let lang = use_state(|| AttrValue::from(i18n::current_lang()));
    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |code: String| lang.set(AttrValue::from(code)))
    };
    html! {
        <>
            <Header current_lang={(*lang).clone()} on_lang_change={on_lang_change} />
            // Keyed on the language so every label re-renders after a switch.
            <OrderBuilder key={lang.to_string()} vendor_id={props.vendor_id.clone()} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn app_renders_header_and_first_vendor() {
        i18n::set_lang("en");
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains("lang-select"), "{html}");
        assert!(html.contains("Order Builder"), "{html}");
        assert!(html.contains("ENVELOPE"), "{html}");
        assert!(html.contains("Nothing selected yet."), "{html}");
    }

    #[test]
    fn app_honours_requested_vendor() {
        i18n::set_lang("en");
        let props = AppProps {
            vendor_id: Some(AttrValue::from("cloudline")),
        };
        let html = block_on(LocalServerRenderer::<App>::with_props(props).render());
        assert!(html.contains("Hand-painted Artwork"), "{html}");
    }
}
