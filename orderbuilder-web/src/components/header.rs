use crate::components::daisy_ui::{Select, SelectOption};
use crate::i18n::{locales, set_lang, t};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |lang: AttrValue| {
            set_lang(&lang);
            cb.emit(lang.to_string());
        })
    };
    let options: Vec<SelectOption> = locales()
        .iter()
        .map(|meta| SelectOption {
            label: AttrValue::from(meta.name),
            value: AttrValue::from(meta.code),
            disabled: false,
        })
        .collect();
    html! {
        <header role="banner" class="navbar bg-base-200">
            <h1 class="flex-1 text-xl font-bold">{ t("builder.title") }</h1>
            <nav aria-label={t("builder.language")}>
                <Select
                    id={AttrValue::from("lang-select")}
                    options={options}
                    value={Some(p.current_lang.clone())}
                    aria_label={AttrValue::from(t("builder.language"))}
                    on_change={on_change}
                />
            </nav>
        </header>
    }
}
