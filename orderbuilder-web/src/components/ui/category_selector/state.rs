use orderbuilder_catalog::{
    BehaviorClassifier, CatalogCategory, CompatibilityLookup, SelectedItem, SelectionMap,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct CategorySelectorProps {
    pub category: Rc<CatalogCategory>,
    /// Snapshot of the host's selections. Read only.
    pub selected_items: Rc<SelectionMap>,
    /// Name of the chosen envelope; `None` disables compatibility filtering.
    #[prop_or_default]
    pub selected_envelope: Option<AttrValue>,
    pub vendor_id: AttrValue,
    pub on_select: Callback<SelectedItem>,
    pub on_remove: Callback<String>,
    pub classifier: Rc<dyn BehaviorClassifier>,
    pub compatibility: Rc<dyn CompatibilityLookup>,
}

impl PartialEq for CategorySelectorProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.category, &other.category)
            && Rc::ptr_eq(&self.selected_items, &other.selected_items)
            && self.selected_envelope == other.selected_envelope
            && self.vendor_id == other.vendor_id
            && self.on_select == other.on_select
            && self.on_remove == other.on_remove
            && std::ptr::addr_eq(Rc::as_ptr(&self.classifier), Rc::as_ptr(&other.classifier))
            && std::ptr::addr_eq(
                Rc::as_ptr(&self.compatibility),
                Rc::as_ptr(&other.compatibility),
            )
    }
}
