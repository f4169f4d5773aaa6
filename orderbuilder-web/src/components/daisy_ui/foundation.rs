pub use web_sys::{Event, FocusEvent, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent};
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Classes, Html, Properties, html};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum DaisySize {
    Xs,
    #[default]
    Sm,
    Md,
    Lg,
}

impl DaisySize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}

#[cfg(test)]
mod tests {
    use super::{DaisySize, attr_value, class_list};
    use yew::Classes;

    #[test]
    fn daisy_size_classes_include_prefix_and_suffix() {
        for size in [DaisySize::Xs, DaisySize::Sm, DaisySize::Md, DaisySize::Lg] {
            let class = size.class("input");
            assert!(class.starts_with("input-"));
        }
        assert_eq!(DaisySize::default().class("select"), "select-sm");
    }

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("w-24");
        let rendered = class_list(&["input", "input-bordered"], &extra).to_string();
        assert!(rendered.contains("input-bordered"));
        assert!(rendered.contains("w-24"));
    }

    #[test]
    fn attr_value_clones_optional_attr() {
        let value = Some(yew::AttrValue::from("qty"));
        assert_eq!(attr_value(&value).as_deref(), Some("qty"));
    }
}
