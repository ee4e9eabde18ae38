//! Read-only derived views over a catalog snapshot.
//!
//! Everything here is a pure function of the current products/categories
//! plus parameters: filtering, sorting, pagination, live counts, and the
//! dashboard aggregates. Nothing in this module mutates the store.

mod filter;
mod query;
mod results;
mod stats;

pub use filter::Filter;
pub use query::{ProductQuery, SortOption};
pub use results::{Pagination, SearchResults};
pub use stats::{recent_products, top_categories, CatalogStats};

use crate::catalog::Product;
use crate::ids::CategoryId;

/// Count products referencing a category, computed from the live collection.
///
/// This is the accurate count. It is distinct from the stored
/// [`Category::products_count`](crate::catalog::Category::products_count)
/// field, which is not kept in sync with product mutations; prefer this
/// wherever the real number matters.
pub fn live_product_count(products: &[Product], category: &CategoryId) -> usize {
    products.iter().filter(|p| &p.category == category).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, NewProduct};

    #[test]
    fn live_count_ignores_the_stored_counter() {
        let mut store = CatalogStore::with_demo_data();
        let electronics = CategoryId::new("electronics");

        store.add_product(NewProduct::new(
            "Power Bank",
            "20000mAh power bank",
            79.0,
            electronics.clone(),
            "https://aliexpress.com/item/example4",
        ));

        // Stored counter still says 234; the live count knows better.
        assert_eq!(
            store.category(&electronics).unwrap().products_count,
            234
        );
        assert_eq!(live_product_count(store.products(), &electronics), 3);
    }

    #[test]
    fn live_count_for_unreferenced_category_is_zero() {
        let store = CatalogStore::with_demo_data();
        assert_eq!(
            live_product_count(store.products(), &CategoryId::new("toys")),
            0
        );
    }
}
