pub mod assets;
pub mod calculations;
pub mod catalog;
pub mod models;
pub mod session;

pub use assets::store::{CardStore, StoreError};
pub use catalog::{CardCatalog, CardListing};
pub use models::*;
pub use session::Session;
