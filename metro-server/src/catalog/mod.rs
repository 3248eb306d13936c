//! Network catalog.
//!
//! Holds every city network served by the process, loaded from a JSON
//! description file at startup and rebuilt wholesale on reload.

mod error;
mod shared;
mod store;

pub use error::CatalogError;
pub use shared::SharedCatalog;
pub use store::{Catalog, CatalogDescription};
