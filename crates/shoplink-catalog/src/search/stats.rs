//! Aggregate views for the admin dashboard.

use serde::Serialize;

use crate::catalog::{CatalogStore, Category, Product};

/// Point-in-time aggregates over the catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogStats {
    pub total_products: usize,
    pub in_stock_products: usize,
    pub featured_products: usize,
    pub total_categories: usize,
    pub active_categories: usize,
    /// Mean rating across all products; zero for an empty catalog.
    pub average_rating: f64,
}

impl CatalogStats {
    /// Compute the dashboard aggregates from the current catalog.
    pub fn compute(store: &CatalogStore) -> Self {
        let products = store.products();
        let categories = store.categories();

        let average_rating = if products.is_empty() {
            0.0
        } else {
            products.iter().map(|p| p.rating).sum::<f64>() / products.len() as f64
        };

        Self {
            total_products: products.len(),
            in_stock_products: products.iter().filter(|p| p.in_stock).count(),
            featured_products: products.iter().filter(|p| p.is_featured).count(),
            total_categories: categories.len(),
            active_categories: categories.iter().filter(|c| c.is_active).count(),
            average_rating,
        }
    }
}

/// The `limit` most recently added products, newest first.
pub fn recent_products(products: &[Product], limit: usize) -> Vec<&Product> {
    products.iter().rev().take(limit).collect()
}

/// Categories ranked by their stored counter, largest first.
///
/// Ranks by the denormalized `products_count`, which holds the upstream
/// marketplace sizes; the dashboard shows those numbers, not the live
/// counts.
pub fn top_categories(categories: &[Category], limit: usize) -> Vec<&Category> {
    let mut ranked: Vec<&Category> = categories.iter().collect();
    ranked.sort_by(|a, b| b.products_count.cmp(&a.products_count));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    #[test]
    fn stats_over_demo_data() {
        let store = CatalogStore::with_demo_data();
        let stats = CatalogStats::compute(&store);

        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.in_stock_products, 3);
        assert_eq!(stats.featured_products, 2);
        assert_eq!(stats.total_categories, 6);
        assert_eq!(stats.active_categories, 6);
        assert!((stats.average_rating - 4.6).abs() < 1e-9);
    }

    #[test]
    fn stats_over_empty_store() {
        let stats = CatalogStats::compute(&CatalogStore::new());
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.average_rating, 0.0);
    }

    #[test]
    fn recent_products_newest_first() {
        let store = CatalogStore::with_demo_data();
        let recent = recent_products(store.products(), 2);

        // Seed order is oldest-last-added-first, so the tail comes back
        // reversed.
        let names: Vec<&str> = recent.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop Backpack", "Sport Smartwatch"]);
    }

    #[test]
    fn top_categories_rank_by_stored_counter() {
        let store = CatalogStore::with_demo_data();
        let top = top_categories(store.categories(), 3);

        let counts: Vec<i64> = top.iter().map(|c| c.products_count).collect();
        assert_eq!(counts, vec![567, 345, 278]);
    }
}
