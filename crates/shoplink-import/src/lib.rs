//! CSV bulk import for the shoplink catalog.
//!
//! Converts a delimited source into catalog products one row at a time. Row
//! failures (unknown category name, malformed numbers, wrong column count)
//! are counted and skipped, never aborting the file; only a source that
//! cannot be read at all surfaces as a hard error.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoplink_catalog::catalog::CatalogStore;
//! use shoplink_import::import_products_from_path;
//!
//! let mut store = CatalogStore::with_demo_data();
//! let summary = import_products_from_path("products.csv", &mut store)?;
//! println!("{} imported, {} skipped", summary.succeeded, summary.failed);
//! ```

mod error;
mod products;

pub use error::ImportError;
pub use products::{import_products, import_products_from_path, ImportSummary};
