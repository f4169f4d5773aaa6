use crate::catalog::{WebDataError, embedded_assets, resolve_vendor};
use orderbuilder_catalog::{
    BehaviorClassifier, CatalogAssets, CatalogCategory, CategoryBehavior, CompatibilityLookup,
    ENVELOPE_CATEGORY, SelectionMap, SelectionRequest, VendorCatalog,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, Default)]
pub struct OrderBuilderProps {
    /// Vendor to open with; the first vendor in the catalog otherwise.
    #[prop_or_default]
    pub vendor_id: Option<AttrValue>,
    /// Injected assets. The embedded catalog is used when absent.
    #[prop_or_default]
    pub assets: Option<Rc<CatalogAssets>>,
}

impl PartialEq for OrderBuilderProps {
    fn eq(&self, other: &Self) -> bool {
        self.vendor_id == other.vendor_id
            && match (&self.assets, &other.assets) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

/// Everything the builder renders from, derived once per vendor.
#[derive(Clone)]
pub struct BuilderModel {
    pub assets: Rc<CatalogAssets>,
    pub vendor: Rc<VendorCatalog>,
    pub categories: Vec<Rc<CatalogCategory>>,
    pub classifier: Rc<dyn BehaviorClassifier>,
    pub compatibility: Rc<dyn CompatibilityLookup>,
}

impl BuilderModel {
    /// Build the model for one vendor.
    ///
    /// # Errors
    ///
    /// Returns an error when the vendor cannot be resolved.
    pub fn for_vendor(
        assets: Rc<CatalogAssets>,
        vendor_id: Option<&str>,
    ) -> Result<Self, WebDataError> {
        let vendor = Rc::new(resolve_vendor(&assets, vendor_id)?.clone());
        let categories = vendor.categories.iter().cloned().map(Rc::new).collect();
        let classifier: Rc<dyn BehaviorClassifier> = Rc::new(assets.behaviors.clone());
        let compatibility: Rc<dyn CompatibilityLookup> = Rc::new(assets.compatibility.clone());
        Ok(Self {
            assets,
            vendor,
            categories,
            classifier,
            compatibility,
        })
    }

    /// `(id, name)` for every vendor in the catalog.
    #[must_use]
    pub fn vendor_choices(&self) -> Vec<(String, String)> {
        self.assets
            .catalog
            .vendors
            .iter()
            .map(|vendor| (vendor.vendor_id.clone(), vendor.vendor_name.clone()))
            .collect()
    }

    #[must_use]
    pub fn behavior_of(&self, category_name: &str) -> CategoryBehavior {
        self.classifier.classify(category_name)
    }
}

/// Load the model from injected or embedded assets.
pub(super) fn load_model(
    assets: Option<Rc<CatalogAssets>>,
    vendor_id: Option<&str>,
) -> Result<BuilderModel, WebDataError> {
    let assets = match assets {
        Some(assets) => assets,
        None => embedded_assets()?,
    };
    BuilderModel::for_vendor(assets, vendor_id)
}

/// Next selection snapshot after applying one request.
#[must_use]
pub fn apply_request(
    current: &SelectionMap,
    request: SelectionRequest,
    behavior: CategoryBehavior,
) -> Rc<SelectionMap> {
    let mut next = current.clone();
    next.apply(request, behavior);
    Rc::new(next)
}

/// The envelope name that drives compatibility filtering.
#[must_use]
pub fn selected_envelope(selections: &SelectionMap) -> Option<AttrValue> {
    selections
        .envelope_name(ENVELOPE_CATEGORY)
        .map(|name| AttrValue::from(name.to_string()))
}
