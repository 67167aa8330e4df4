//! Hardcoded quote catalogs and the topic lookup used by the quote generators.

pub mod catalogs;

pub use catalogs::{all_catalogs, get_catalog, Catalog, MatchMode, Quote, DEFAULT_LIMIT};

pub mod prelude {
    pub use super::catalogs::{get_catalog, Catalog, Quote};
    pub use nx_core::{Error, Result};
}
