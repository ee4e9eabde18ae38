//! Product types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ProductId};

/// A product in the catalog.
///
/// `created_at` and `updated_at` are Unix timestamps assigned by the store;
/// callers never set them directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Current price.
    pub price: f64,
    /// Original price before discount (for strike-through display).
    pub original_price: Option<f64>,
    /// Stored discount percentage. Derivable from the price pair; kept as a
    /// field because the admin forms submit it precomputed.
    pub discount: Option<u8>,
    /// Image URLs, in display order.
    pub images: Vec<String>,
    /// Category this product belongs to. Weak reference: the store does not
    /// verify it matches an existing category at write time.
    pub category: CategoryId,
    /// Average rating, expected 0-5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub reviews_count: u32,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Whether the product is featured on the home page.
    pub is_featured: bool,
    /// External marketplace link that earns the referral commission. The
    /// storefront's "buy" action only opens this URL.
    pub affiliate_url: String,
    /// Specification key/value pairs (e.g. "Weight" -> "250g").
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specifications: BTreeMap<String, String>,
    /// Free-text tags for search.
    pub tags: Vec<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Check if the product is shown with a sale price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }

    /// Discount percentage derived from the price pair, ignoring the stored
    /// `discount` field.
    pub fn discount_percent(&self) -> Option<u8> {
        derive_discount(self.price, self.original_price)
    }
}

/// Derive the rounded discount percentage from a price pair.
///
/// `None` unless the original price is positive and above the current price.
pub fn derive_discount(price: f64, original_price: Option<f64>) -> Option<u8> {
    let original = original_price?;
    if original <= 0.0 || original <= price {
        return None;
    }
    let percent = ((original - price) / original * 100.0).round();
    Some(percent.clamp(0.0, 100.0) as u8)
}

/// Input for [`super::CatalogStore::add_product`]: a product minus the
/// fields the store assigns (id and date stamps).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub discount: Option<u8>,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: CategoryId,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub affiliate_url: String,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_in_stock() -> bool {
    true
}

impl NewProduct {
    /// Create a new product draft with the required fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: CategoryId,
        affiliate_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            original_price: None,
            discount: None,
            images: Vec::new(),
            category,
            rating: 0.0,
            reviews_count: 0,
            in_stock: true,
            is_featured: false,
            affiliate_url: affiliate_url.into(),
            specifications: BTreeMap::new(),
            tags: Vec::new(),
        }
    }

    /// Set the pre-discount price and the stored discount derived from it.
    pub fn with_original_price(mut self, original_price: f64) -> Self {
        self.original_price = Some(original_price);
        self.discount = derive_discount(self.price, self.original_price);
        self
    }

    /// Set the image URLs.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Set the rating and review count.
    pub fn with_rating(mut self, rating: f64, reviews_count: u32) -> Self {
        self.rating = rating;
        self.reviews_count = reviews_count;
        self
    }

    /// Set the search tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Mark the product as featured.
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Mark the product as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}

/// Partial update for [`super::CatalogStore::update_product`].
///
/// `None` fields are retained from the existing product. Optional scalar
/// fields can be set but not cleared through a patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub discount: Option<u8>,
    pub images: Option<Vec<String>>,
    pub category: Option<CategoryId>,
    pub rating: Option<f64>,
    pub reviews_count: Option<u32>,
    pub in_stock: Option<bool>,
    pub is_featured: Option<bool>,
    pub affiliate_url: Option<String>,
    pub specifications: Option<BTreeMap<String, String>>,
    pub tags: Option<Vec<String>>,
}

impl ProductPatch {
    /// Patch that only changes the price.
    pub fn price(value: f64) -> Self {
        Self {
            price: Some(value),
            ..Self::default()
        }
    }

    /// Check whether the patch changes anything at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the patch into an existing product. Timestamps are handled by
    /// the store, not here.
    pub(crate) fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = Some(original_price);
        }
        if let Some(discount) = self.discount {
            product.discount = Some(discount);
        }
        if let Some(images) = self.images {
            product.images = images;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        if let Some(reviews_count) = self.reviews_count {
            product.reviews_count = reviews_count;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(is_featured) = self.is_featured {
            product.is_featured = is_featured;
        }
        if let Some(affiliate_url) = self.affiliate_url {
            product.affiliate_url = affiliate_url;
        }
        if let Some(specifications) = self.specifications {
            product.specifications = specifications;
        }
        if let Some(tags) = self.tags {
            product.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = NewProduct::new(
            "Test Product",
            "A product",
            49.0,
            CategoryId::new("electronics"),
            "https://example.com/item/1",
        );
        assert!(draft.in_stock);
        assert!(!draft.is_featured);
        assert!(draft.tags.is_empty());
        assert_eq!(draft.rating, 0.0);
    }

    #[test]
    fn test_discount_derivation() {
        assert_eq!(derive_discount(299.0, Some(399.0)), Some(25));
        assert_eq!(derive_discount(2000.0, Some(3000.0)), Some(33));
        assert_eq!(derive_discount(100.0, None), None);
        assert_eq!(derive_discount(100.0, Some(100.0)), None);
        assert_eq!(derive_discount(100.0, Some(80.0)), None);
        assert_eq!(derive_discount(100.0, Some(0.0)), None);
    }

    #[test]
    fn test_with_original_price_sets_discount() {
        let draft = NewProduct::new(
            "Sale Item",
            "On sale",
            450.0,
            CategoryId::new("electronics"),
            "https://example.com/item/2",
        )
        .with_original_price(599.0);

        assert_eq!(draft.original_price, Some(599.0));
        assert_eq!(draft.discount, Some(25));
    }

    #[test]
    fn test_empty_patch() {
        assert!(ProductPatch::default().is_empty());
        assert!(!ProductPatch::price(10.0).is_empty());
    }
}
