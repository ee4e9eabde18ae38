//! Product query builder and sort options.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::search::{Filter, Pagination, SearchResults};

/// Sort options for product listings.
///
/// The string tokens (`as_str`/`parse_token`) are the values the storefront
/// filter widget submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Storefront default. No popularity metric exists in the data model,
    /// so this preserves the input order.
    #[default]
    Popularity,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    Rating,
    /// Most recently created first.
    Newest,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Popularity => "popularity",
            SortOption::PriceAsc => "price-low",
            SortOption::PriceDesc => "price-high",
            SortOption::Rating => "rating",
            SortOption::Newest => "newest",
        }
    }

    pub fn parse_token(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "popularity" => Some(SortOption::Popularity),
            "price-low" => Some(SortOption::PriceAsc),
            "price-high" => Some(SortOption::PriceDesc),
            "rating" => Some(SortOption::Rating),
            "newest" => Some(SortOption::Newest),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Popularity => "Popularity",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Newest => "Newest",
        }
    }

    /// Sort products in place. Sorts are stable, so ties keep their input
    /// order.
    pub fn apply(&self, products: &mut [Product]) {
        match self {
            SortOption::Popularity => {}
            SortOption::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOption::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOption::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOption::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
    }
}

/// A storefront product query: filters, sort and pagination over a catalog
/// snapshot. Executing a query never mutates the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Filters to apply (AND semantics).
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl ProductQuery {
    /// Create a new query with no filters and default pagination.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort: SortOption::Popularity,
            page: 1,
            per_page: 20,
        }
    }

    /// Add a free-text filter. Empty queries are ignored.
    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.is_empty() {
            self.filters.push(Filter::Text(query));
        }
        self
    }

    /// Restrict to a single category.
    pub fn with_category(mut self, id: CategoryId) -> Self {
        self.filters.push(Filter::Category(id));
        self
    }

    /// Restrict to an inclusive price range.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_some() || max.is_some() {
            self.filters.push(Filter::PriceRange { min, max });
        }
        self
    }

    /// Only include in-stock products.
    pub fn in_stock_only(mut self) -> Self {
        self.filters.push(Filter::InStock);
        self
    }

    /// Add an arbitrary filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Run the query against a product snapshot.
    pub fn execute(&self, products: &[Product]) -> SearchResults<Product> {
        let mut matched: Vec<Product> = products
            .iter()
            .filter(|p| self.filters.iter().all(|f| f.matches(p)))
            .cloned()
            .collect();

        self.sort.apply(&mut matched);

        let total = matched.len() as i64;
        let pagination = Pagination::new(self.page, self.per_page, total);

        let start = pagination.offset().clamp(0, total) as usize;
        let end = (pagination.offset() + self.per_page).clamp(0, total) as usize;

        SearchResults::new(matched[start..end].to_vec(), pagination)
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, NewProduct};

    fn store_with_prices(prices: &[f64]) -> CatalogStore {
        let mut store = CatalogStore::new();
        for (i, price) in prices.iter().enumerate() {
            store.add_product(NewProduct::new(
                format!("Product {}", i),
                "desc",
                *price,
                CategoryId::new("electronics"),
                "https://aliexpress.com/item/test",
            ));
        }
        store
    }

    #[test]
    fn sort_tokens_round_trip() {
        for sort in [
            SortOption::Popularity,
            SortOption::PriceAsc,
            SortOption::PriceDesc,
            SortOption::Rating,
            SortOption::Newest,
        ] {
            assert_eq!(SortOption::parse_token(sort.as_str()), Some(sort));
        }
        assert_eq!(SortOption::parse_token("best-selling"), None);
    }

    #[test]
    fn price_low_sorts_ascending() {
        let store = store_with_prices(&[450.0, 129.0, 299.0]);
        let results = ProductQuery::new()
            .with_sort(SortOption::PriceAsc)
            .execute(store.products());

        let prices: Vec<f64> = results.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![129.0, 299.0, 450.0]);
    }

    #[test]
    fn price_high_sorts_descending() {
        let store = store_with_prices(&[450.0, 129.0, 299.0]);
        let results = ProductQuery::new()
            .with_sort(SortOption::PriceDesc)
            .execute(store.products());

        let prices: Vec<f64> = results.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![450.0, 299.0, 129.0]);
    }

    #[test]
    fn popularity_preserves_input_order() {
        let store = store_with_prices(&[450.0, 129.0, 299.0]);
        let results = ProductQuery::new().execute(store.products());

        let prices: Vec<f64> = results.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![450.0, 129.0, 299.0]);
    }

    #[test]
    fn rating_sorts_descending() {
        let mut store = CatalogStore::new();
        for (name, rating) in [("low", 3.1), ("high", 4.9), ("mid", 4.2)] {
            store.add_product(
                NewProduct::new(
                    name,
                    "desc",
                    10.0,
                    CategoryId::new("electronics"),
                    "https://aliexpress.com/item/test",
                )
                .with_rating(rating, 10),
            );
        }

        let results = ProductQuery::new()
            .with_sort(SortOption::Rating)
            .execute(store.products());
        let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn newest_sorts_by_created_at_descending() {
        let store = CatalogStore::with_demo_data();
        let results = ProductQuery::new()
            .with_sort(SortOption::Newest)
            .execute(store.products());

        let stamps: Vec<i64> = results.items.iter().map(|p| p.created_at).collect();
        let mut expected = stamps.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(stamps, expected);
    }

    #[test]
    fn category_filter_keeps_relative_order() {
        let store = CatalogStore::with_demo_data();
        let results = ProductQuery::new()
            .with_category(CategoryId::new("electronics"))
            .execute(store.products());

        assert!(results
            .items
            .iter()
            .all(|p| p.category == CategoryId::new("electronics")));
        // Demo products 1 and 2 are both electronics, in seed order.
        let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Wireless Noise-Cancelling Headphones", "Sport Smartwatch"]
        );
    }

    #[test]
    fn combined_filters_use_and_semantics() {
        let store = CatalogStore::with_demo_data();
        let results = ProductQuery::new()
            .with_text("smartwatch")
            .with_price_range(Some(400.0), Some(500.0))
            .in_stock_only()
            .execute(store.products());

        assert_eq!(results.items.len(), 1);
        assert_eq!(results.items[0].name, "Sport Smartwatch");
    }

    #[test]
    fn empty_text_filter_is_ignored() {
        let store = CatalogStore::with_demo_data();
        let query = ProductQuery::new().with_text("");
        assert!(query.filters.is_empty());
        assert_eq!(query.execute(store.products()).items.len(), 3);
    }

    #[test]
    fn pagination_slices_results() {
        let store = store_with_prices(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let results = ProductQuery::new()
            .with_pagination(2, 2)
            .execute(store.products());

        assert_eq!(results.items.len(), 2);
        assert_eq!(results.pagination.total, 5);
        assert_eq!(results.pagination.total_pages, 3);
        assert!(results.pagination.has_prev);
        assert!(results.pagination.has_next);
    }

    #[test]
    fn page_past_the_end_is_empty_but_well_formed() {
        let store = store_with_prices(&[1.0, 2.0]);
        let results = ProductQuery::new()
            .with_pagination(9, 10)
            .execute(store.products());

        assert!(results.items.is_empty());
        assert_eq!(results.pagination.total, 2);
    }
}
