//! The in-memory catalog store.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::catalog::category::{Category, CategoryPatch, NewCategory};
use crate::catalog::product::{NewProduct, Product, ProductPatch};
use crate::catalog::seed;
use crate::error::CatalogError;
use crate::ids::{CategoryId, ProductId};

/// Exclusive owner of the product and category collections.
///
/// All mutation goes through this type. State lives for the lifetime of the
/// process; there is no persistence and no transaction support. Insertion
/// order is preserved for both collections.
///
/// Operations addressing an unknown id return an explicit not-found error
/// and leave every other entry untouched; callers that want the legacy
/// ignore-missing behavior can discard the `Err`.
///
/// Not safe for concurrent mutation: a multi-user host must wrap the store
/// in its own mutual exclusion.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the fixed demo dataset.
    pub fn with_demo_data() -> Self {
        Self {
            products: seed::demo_products(),
            categories: seed::demo_categories(),
        }
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a category by its display name, case-insensitively.
    ///
    /// This is how the CSV importer resolves the human-readable category
    /// column into a category id.
    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        let needle = name.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
    }

    /// Add a product, assigning a fresh id and the current date to both
    /// date stamps. No validation is performed beyond what the types
    /// enforce; the category reference is not checked.
    pub fn add_product(&mut self, draft: NewProduct) -> &Product {
        let now = current_timestamp();
        let product = Product {
            id: ProductId::generate(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            original_price: draft.original_price,
            discount: draft.discount,
            images: draft.images,
            category: draft.category,
            rating: draft.rating,
            reviews_count: draft.reviews_count,
            in_stock: draft.in_stock,
            is_featured: draft.is_featured,
            affiliate_url: draft.affiliate_url,
            specifications: draft.specifications,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        };
        tracing::debug!(id = %product.id, name = %product.name, "product added");

        let index = self.products.len();
        self.products.push(product);
        &self.products[index]
    }

    /// Merge a partial update into the matching product and refresh its
    /// `updated_at` stamp. Fields the patch leaves `None` are retained.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<&Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?;

        let product = &mut self.products[index];
        patch.apply(product);
        product.updated_at = current_timestamp();
        tracing::debug!(id = %id, "product updated");

        Ok(&self.products[index])
    }

    /// Remove the matching product. Hard removal, no tombstone.
    pub fn delete_product(&mut self, id: &ProductId) -> Result<Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?;

        let removed = self.products.remove(index);
        tracing::debug!(id = %removed.id, "product deleted");
        Ok(removed)
    }

    /// Add a category with a fresh id, the current date, and a stored
    /// counter of zero regardless of actual product membership.
    pub fn add_category(&mut self, draft: NewCategory) -> &Category {
        let category = Category {
            id: CategoryId::generate(),
            name: draft.name,
            description: draft.description,
            icon: draft.icon,
            parent_id: draft.parent_id,
            is_active: draft.is_active,
            products_count: 0,
            created_at: current_timestamp(),
        };
        tracing::debug!(id = %category.id, name = %category.name, "category added");

        let index = self.categories.len();
        self.categories.push(category);
        &self.categories[index]
    }

    /// Merge a partial update into the matching category.
    pub fn update_category(
        &mut self,
        id: &CategoryId,
        patch: CategoryPatch,
    ) -> Result<&Category, CatalogError> {
        let index = self
            .categories
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.to_string()))?;

        patch.apply(&mut self.categories[index]);
        tracing::debug!(id = %id, "category updated");

        Ok(&self.categories[index])
    }

    /// Remove the matching category.
    ///
    /// Performs no referential check and no cascade: products referencing
    /// the id are left in place with a dangling category. Refusing deletion
    /// while references exist is the calling layer's contract, not the
    /// store's.
    pub fn delete_category(&mut self, id: &CategoryId) -> Result<Category, CatalogError> {
        let index = self
            .categories
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.to_string()))?;

        let removed = self.categories.remove(index);
        tracing::debug!(id = %removed.id, "category deleted");
        Ok(removed)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::ProductPatch;

    fn draft(name: &str, price: f64) -> NewProduct {
        NewProduct::new(
            name,
            "test description",
            price,
            CategoryId::new("electronics"),
            "https://aliexpress.com/item/test",
        )
    }

    #[test]
    fn add_product_assigns_id_and_stamps() {
        let mut store = CatalogStore::new();
        let product = store.add_product(draft("Widget", 10.0));

        assert!(!product.id.as_str().is_empty());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn add_product_grows_collection_with_unique_ids() {
        let mut store = CatalogStore::new();
        for i in 0..25 {
            store.add_product(draft(&format!("Product {}", i), i as f64));
        }

        assert_eq!(store.products().len(), 25);

        let mut ids: Vec<_> = store.products().iter().map(|p| p.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn add_product_preserves_insertion_order() {
        let mut store = CatalogStore::new();
        store.add_product(draft("First", 1.0));
        store.add_product(draft("Second", 2.0));
        store.add_product(draft("Third", 3.0));

        let names: Vec<_> = store.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn update_product_changes_only_patched_fields() {
        let mut store = CatalogStore::new();
        let id = store
            .add_product(draft("Widget", 10.0).with_rating(4.5, 12))
            .id
            .clone();
        let before = store.product(&id).cloned().unwrap();

        let updated = store
            .update_product(&id, ProductPatch::price(15.0))
            .unwrap()
            .clone();

        assert_eq!(updated.price, 15.0);
        assert!(updated.updated_at >= before.created_at);

        // Everything except price and updated_at is unchanged.
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.description, before.description);
        assert_eq!(updated.rating, before.rating);
        assert_eq!(updated.reviews_count, before.reviews_count);
        assert_eq!(updated.category, before.category);
        assert_eq!(updated.affiliate_url, before.affiliate_url);
        assert_eq!(updated.tags, before.tags);
        assert_eq!(updated.created_at, before.created_at);
    }

    #[test]
    fn update_unknown_product_leaves_store_unchanged() {
        let mut store = CatalogStore::new();
        store.add_product(draft("Widget", 10.0));
        let snapshot = store.products().to_vec();

        let result = store.update_product(&ProductId::new("missing"), ProductPatch::price(99.0));

        assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
        assert_eq!(store.products(), snapshot.as_slice());
    }

    #[test]
    fn delete_product_is_idempotent_on_the_collection() {
        let mut store = CatalogStore::new();
        let id = store.add_product(draft("Widget", 10.0)).id.clone();
        store.add_product(draft("Other", 20.0));

        assert!(store.delete_product(&id).is_ok());
        assert_eq!(store.products().len(), 1);

        // Second delete reports not-found and changes nothing.
        let snapshot = store.products().to_vec();
        assert!(matches!(
            store.delete_product(&id),
            Err(CatalogError::ProductNotFound(_))
        ));
        assert_eq!(store.products(), snapshot.as_slice());
    }

    #[test]
    fn add_category_starts_with_zero_counter() {
        let mut store = CatalogStore::new();
        store.add_product(draft("Widget", 10.0));

        let category = store.add_category(NewCategory::new(
            "Electronics",
            "Consumer electronics",
            "📱",
        ));

        // Counter starts at zero even though a product already references
        // the "electronics" id.
        assert_eq!(category.products_count, 0);
    }

    #[test]
    fn delete_category_does_not_cascade() {
        let mut store = CatalogStore::with_demo_data();
        let electronics = CategoryId::new("electronics");
        let products_before = store.products().len();
        assert!(store
            .products()
            .iter()
            .any(|p| p.category == electronics));

        store.delete_category(&electronics).unwrap();

        assert!(store.category(&electronics).is_none());
        assert_eq!(store.products().len(), products_before);
        // References are now dangling, not removed.
        assert!(store
            .products()
            .iter()
            .any(|p| p.category == electronics));
    }

    #[test]
    fn find_category_by_name_is_case_insensitive() {
        let store = CatalogStore::with_demo_data();
        let category = store.find_category_by_name("eLeCtRoNiCs").unwrap();
        assert_eq!(category.id, CategoryId::new("electronics"));
        assert!(store.find_category_by_name("Nonexistent").is_none());
    }

    #[test]
    fn demo_data_has_stale_counters() {
        let store = CatalogStore::with_demo_data();
        let electronics = store.category(&CategoryId::new("electronics")).unwrap();

        // The stored counter reflects the upstream marketplace size, not the
        // two demo products actually referencing the category.
        assert_eq!(electronics.products_count, 234);
        assert_eq!(
            store
                .products()
                .iter()
                .filter(|p| p.category == electronics.id)
                .count(),
            2
        );
    }
}
