//! Filesystem backend for the card asset store.
//!
//! Layout, one directory per bracket and one sub-directory per card:
//!
//! ```text
//! cards/
//!   2000-2900/
//!     classic/
//!       image.png          required
//!       name.txt           required
//!       cover-image.png    optional
//!       details.txt        optional
//!   3000-4900/
//!   5000+/
//! ```

mod factory;
mod store;

pub use factory::FsCardStoreFactory;
pub use store::FsCardStore;
