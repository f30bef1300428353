use std::path::PathBuf;
use std::sync::Arc;

use income_assets_fs::FsCardStoreFactory;
use income_core::assets::{AssetFile, CardDir, StoreRegistry};
use income_core::{BracketId, BracketMapping, CardCatalog, CardListing, CardStore, StoreError};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::AppConfig;

/// Registry with every store backend this binary ships.
pub fn build_registry() -> StoreRegistry {
    let mut registry = StoreRegistry::new();
    registry.register(Box::new(FsCardStoreFactory));
    registry
}

/// What the window needs to turn a net income into cards.
#[derive(Clone)]
pub struct AppServices {
    pub mapping: BracketMapping,
    pub store: Arc<dyn CardStore>,
}

impl AppServices {
    /// Opens the configured store.
    ///
    /// A missing asset root is not fatal: the app still starts and every
    /// eligible income reports that no cards were found.
    ///
    /// # Errors
    /// Any other store error, e.g. an unknown backend.
    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        let store: Arc<dyn CardStore> = match build_registry().create(&config.assets) {
            Ok(store) => Arc::from(store),
            Err(StoreError::NotFound(what)) => {
                warn!(%what, "card assets unavailable, results will be empty");
                Arc::new(MissingStore {
                    root: config.assets.root.clone(),
                })
            }
            Err(e) => return Err(e),
        };
        info!(backend = %config.assets.backend, "card store ready");

        Ok(Self {
            mapping: config.brackets.clone(),
            store,
        })
    }

    pub fn listing(
        &self,
        net_income: Decimal,
    ) -> CardListing {
        CardCatalog::new(&self.mapping, self.store.as_ref()).listing(net_income)
    }
}

/// Stands in for a store whose root directory does not exist.
struct MissingStore {
    root: PathBuf,
}

impl CardStore for MissingStore {
    fn list_card_dirs(
        &self,
        bracket: BracketId,
    ) -> Result<Vec<CardDir>, StoreError> {
        Err(StoreError::NotFound(format!(
            "asset root '{}' is missing, cannot list {bracket}",
            self.root.display()
        )))
    }

    fn read_asset(
        &self,
        _card: &CardDir,
        _file: AssetFile,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(None)
    }
}
