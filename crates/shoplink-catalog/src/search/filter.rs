//! Product filters.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::CategoryId;

/// A filter over catalog products.
///
/// Filters are pure predicates; combining several means AND-ing them. An
/// absent filter (e.g. no category selected) is simply not added to the
/// query, so "no selection" never needs a sentinel value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring match in name or description.
    Text(String),
    /// Products belonging to a single category.
    Category(CategoryId),
    /// Inclusive price range; either bound may be open.
    PriceRange {
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Only products currently in stock.
    InStock,
}

impl Filter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<f64>, max: Option<f64>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(query) => {
                let needle = query.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
            Filter::Category(id) => &product.category == id,
            Filter::PriceRange { min, max } => {
                min.map_or(true, |m| product.price >= m)
                    && max.map_or(true, |m| product.price <= m)
            }
            Filter::InStock => product.in_stock,
        }
    }
}
