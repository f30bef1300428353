use income_core::CardStore;
use income_core::assets::{StoreConfig, StoreError, StoreFactory};
use tracing::info;

use crate::store::FsCardStore;

/// [`StoreFactory`] for card directories on the local filesystem.
///
/// Register this with a [`income_core::assets::StoreRegistry`] to make the
/// `"fs"` backend available:
///
/// ```rust,no_run
/// use income_core::assets::StoreRegistry;
/// use income_assets_fs::FsCardStoreFactory;
///
/// let mut registry = StoreRegistry::new();
/// registry.register(Box::new(FsCardStoreFactory));
/// ```
pub struct FsCardStoreFactory;

impl StoreFactory for FsCardStoreFactory {
    fn backend_name(&self) -> &'static str {
        "fs"
    }

    fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn CardStore>, StoreError> {
        let store = FsCardStore::new(config.clone())?;
        info!(root = %config.root.display(), "opened filesystem card store");
        Ok(Box::new(store))
    }
}
