pub mod factory;
pub mod store;

pub use factory::{StoreConfig, StoreFactory, StoreRegistry};
pub use store::{AssetFile, CardDir, CardStore, StoreError};
