use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use super::store::{CardStore, StoreError};
use crate::models::BracketId;

fn default_backend() -> String {
    "fs".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from("cards")
}

/// Backend-agnostic asset store configuration.
///
/// `backend` must match the [`StoreFactory::backend_name`] of a registered
/// factory. Each bracket's assets live at `root/<bracket id>` unless `paths`
/// overrides it; relative overrides are resolved against `root`.
///
/// ```toml
/// backend = "fs"
/// root = "cards"
///
/// [paths]
/// "5000+" = "premium"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default)]
    pub paths: BTreeMap<BracketId, PathBuf>,
}

impl StoreConfig {
    /// Directory holding the card sub-directories of `bracket`.
    pub fn path_for(
        &self,
        bracket: BracketId,
    ) -> PathBuf {
        match self.paths.get(&bracket) {
            Some(path) => self.root.join(path),
            None => self.root.join(bracket.as_str()),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            root: default_root(),
            paths: BTreeMap::new(),
        }
    }
}

/// One implementation per store backend. Each backend crate exports a unit
/// struct implementing this and registers it with a [`StoreRegistry`].
pub trait StoreFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn CardStore>, StoreError>;
}

/// Card store backends the binary knows how to open, looked up by the
/// `assets.backend` config key.
pub struct StoreRegistry {
    factories: BTreeMap<&'static str, Box<dyn StoreFactory>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// A later factory with the same backend name wins.
    pub fn register(
        &mut self,
        factory: Box<dyn StoreFactory>,
    ) {
        let name = factory.backend_name();
        if self.factories.insert(name, factory).is_some() {
            debug!(backend = name, "replaced card store backend");
        }
    }

    pub fn available_backends(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    /// Opens the card store named by `config.backend`.
    ///
    /// # Errors
    /// * [`StoreError::Configuration`] for a backend name nothing registered.
    /// * Whatever the backend's own `create` reports, such as a missing root.
    pub fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn CardStore>, StoreError> {
        let Some(factory) = self.factories.get(config.backend.as_str()) else {
            return Err(StoreError::Configuration(format!(
                "no card store backend named '{}' (known: {})",
                config.backend,
                self.available_backends().join(", ")
            )));
        };

        debug!(backend = %config.backend, root = %config.root.display(), "opening card store");
        factory.create(config)
    }
}
