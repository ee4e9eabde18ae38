//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog store operations.
///
/// The store is in-memory and synchronous, so the only failure mode is
/// addressing an entity that does not exist. All other entries are left
/// untouched when an operation fails.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
}
