//! Catalog domain types and logic for the shoplink affiliate storefront.
//!
//! This crate owns the storefront's in-memory state:
//!
//! - **Catalog**: products, categories, and the store that holds them
//! - **Search**: filters, sorting, and pagination over catalog snapshots
//!
//! All state lives in memory for the lifetime of the owning process and is
//! seeded from a fixed demo dataset. The store is handed to consumers as an
//! explicit `&`/`&mut` handle; there is no global instance.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoplink_catalog::prelude::*;
//!
//! let mut store = CatalogStore::with_demo_data();
//!
//! let added = store.add_product(
//!     NewProduct::new(
//!         "USB-C Hub",
//!         "7-in-1 hub with HDMI and card reader",
//!         89.0,
//!         CategoryId::new("electronics"),
//!         "https://aliexpress.com/item/example",
//!     ),
//! );
//! let id = added.id.clone();
//!
//! let results = ProductQuery::new()
//!     .with_text("hub")
//!     .with_sort(SortOption::PriceAsc)
//!     .execute(store.products());
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod search;

pub use error::CatalogError;
pub use ids::{CategoryId, ProductId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::{CategoryId, ProductId};

    // Catalog
    pub use crate::catalog::{
        CatalogStore, Category, CategoryPatch, NewCategory, NewProduct, Product, ProductPatch,
    };

    // Search
    pub use crate::search::{
        live_product_count, CatalogStats, Filter, Pagination, ProductQuery, SearchResults,
        SortOption,
    };
}
