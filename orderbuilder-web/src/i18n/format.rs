#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Format a number using the current locale via Intl.
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = js_sys::Array::new();
            locales.push(&JsValue::from_str(&bundle.lang));
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| num.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        num.to_string()
    }
}

/// Group the integer digits of an already rounded amount in threes.
fn grouped_two_decimals(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && !fixed.trim_matches(['0', '.']).is_empty() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac}")
}

/// Format a price with exactly two decimals and grouped thousands.
///
/// In the browser the current locale decides the separators.
#[must_use]
pub fn fmt_price(amount: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = js_sys::Array::new();
            locales.push(&JsValue::from_str(&bundle.lang));
            let opts = Object::new();
            for key in ["minimumFractionDigits", "maximumFractionDigits"] {
                let _ = Reflect::set(&opts, &JsValue::from_str(key), &JsValue::from_f64(2.0));
            }
            let nf = Intl::NumberFormat::new(&locales, &opts);
            nf.format()
                .call1(&nf, &JsValue::from_f64(amount))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| grouped_two_decimals(amount))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        grouped_two_decimals(amount)
    }
}
