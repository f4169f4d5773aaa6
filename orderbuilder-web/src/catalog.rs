//! Catalog assets as the browser build sees them.
use orderbuilder_catalog::{CatalogAssets, DataError, EmbeddedDataLoader, VendorCatalog, load_assets};
use once_cell::unsync::OnceCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebDataError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Load(#[from] anyhow::Error),
    #[error("catalog lists no vendors")]
    NoVendors,
}

thread_local! {
    static EMBEDDED: OnceCell<Rc<CatalogAssets>> = const { OnceCell::new() };
}

/// Assets compiled into the bundle, parsed once per thread.
///
/// # Errors
///
/// Returns an error if any embedded JSON file fails to parse.
pub fn embedded_assets() -> Result<Rc<CatalogAssets>, WebDataError> {
    EMBEDDED.with(|cell| {
        cell.get_or_try_init(|| load_assets(&EmbeddedDataLoader).map(Rc::new))
            .cloned()
            .map_err(WebDataError::from)
    })
}

/// The requested vendor, or the first one when none is requested.
///
/// # Errors
///
/// Returns [`WebDataError::Data`] for an unknown vendor and
/// [`WebDataError::NoVendors`] for an empty catalog.
pub fn resolve_vendor<'a>(
    assets: &'a CatalogAssets,
    vendor_id: Option<&str>,
) -> Result<&'a VendorCatalog, WebDataError> {
    match vendor_id {
        Some(id) => Ok(assets.vendor(id)?),
        None => assets.default_vendor().ok_or(WebDataError::NoVendors),
    }
}
