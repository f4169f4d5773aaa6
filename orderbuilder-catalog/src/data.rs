//! Catalog assets and the loaders that produce them.
use crate::behavior::BehaviorTable;
use crate::catalog::{CatalogData, VendorCatalog};
use crate::compat::CompatibilityTable;
use thiserror::Error;

const DEFAULT_CATALOG_DATA: &str =
    include_str!("../../orderbuilder-web/static/assets/data/catalog.json");
const DEFAULT_BEHAVIOR_DATA: &str =
    include_str!("../../orderbuilder-web/static/assets/data/behaviors.json");
const DEFAULT_COMPATIBILITY_DATA: &str =
    include_str!("../../orderbuilder-web/static/assets/data/compatibility.json");

/// Category whose selection drives basket and burner compatibility.
pub const ENVELOPE_CATEGORY: &str = "ENVELOPE";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("{file}: JSON parsing error: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unknown vendor: {0}")]
    UnknownVendor(String),
}

/// Catalog, behavior table and compatibility table, loaded together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogAssets {
    pub catalog: CatalogData,
    pub behaviors: BehaviorTable,
    pub compatibility: CompatibilityTable,
}

impl CatalogAssets {
    /// Look up a vendor's catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownVendor`] if the catalog has no such vendor.
    pub fn vendor(&self, vendor_id: &str) -> Result<&VendorCatalog, DataError> {
        self.catalog
            .vendor(vendor_id)
            .ok_or_else(|| DataError::UnknownVendor(vendor_id.to_string()))
    }

    /// First vendor in the catalog, used when none is requested.
    #[must_use]
    pub fn default_vendor(&self) -> Option<&VendorCatalog> {
        self.catalog.vendors.first()
    }
}

/// Source of catalog assets. Platforms provide their own implementation.
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every vendor's catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or parsed.
    fn load_catalog(&self) -> Result<CatalogData, Self::Error>;

    /// Load the category behavior table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be loaded or parsed.
    fn load_behaviors(&self) -> Result<BehaviorTable, Self::Error>;

    /// Load the envelope compatibility table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be loaded or parsed.
    fn load_compatibility(&self) -> Result<CompatibilityTable, Self::Error>;
}

/// Load all three assets through one loader.
///
/// # Errors
///
/// Returns the first loader error encountered.
pub fn load_assets<L>(loader: &L) -> anyhow::Result<CatalogAssets>
where
    L: DataLoader,
    L::Error: Into<anyhow::Error>,
{
    let catalog = loader.load_catalog().map_err(Into::into)?;
    let behaviors = loader.load_behaviors().map_err(Into::into)?;
    let compatibility = loader.load_compatibility().map_err(Into::into)?;
    log::debug!(
        "loaded {} vendor catalog(s), {} behavior rule(s)",
        catalog.vendors.len(),
        behaviors.categories.len()
    );
    Ok(CatalogAssets {
        catalog,
        behaviors,
        compatibility,
    })
}

/// Loader backed by the JSON files compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataLoader;

impl DataLoader for EmbeddedDataLoader {
    type Error = DataError;

    fn load_catalog(&self) -> Result<CatalogData, Self::Error> {
        CatalogData::from_json(DEFAULT_CATALOG_DATA).map_err(|source| DataError::Parse {
            file: "catalog.json",
            source,
        })
    }

    fn load_behaviors(&self) -> Result<BehaviorTable, Self::Error> {
        BehaviorTable::from_json(DEFAULT_BEHAVIOR_DATA).map_err(|source| DataError::Parse {
            file: "behaviors.json",
            source,
        })
    }

    fn load_compatibility(&self) -> Result<CompatibilityTable, Self::Error> {
        CompatibilityTable::from_json(DEFAULT_COMPATIBILITY_DATA).map_err(|source| {
            DataError::Parse {
                file: "compatibility.json",
                source,
            }
        })
    }
}
