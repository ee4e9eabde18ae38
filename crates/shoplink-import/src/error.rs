//! Import error types.

use thiserror::Error;

/// Errors that abort an import outright.
///
/// Row-level problems never show up here; they are tallied in
/// [`crate::ImportSummary`] and logged instead.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The import file could not be opened.
    #[error("Failed to open import file: {0}")]
    Open(#[source] std::io::Error),

    /// The source could not be read as CSV at all.
    #[error("Failed to read CSV source: {0}")]
    Read(#[from] csv::Error),
}
