//! Fixed demo dataset the store is seeded with at startup.
//!
//! Stored category counters hold the size of the upstream marketplace
//! catalog, not the local demo set, so they are stale with respect to the
//! products below from the very first moment.

use std::collections::BTreeMap;

use crate::catalog::category::Category;
use crate::catalog::product::Product;
use crate::ids::{CategoryId, ProductId};

// Seed timestamps (Unix seconds, midnight UTC).
const JAN_01_2025: i64 = 1_735_689_600;
const JAN_08_2025: i64 = 1_736_294_400;
const JAN_09_2025: i64 = 1_736_380_800;
const JAN_10_2025: i64 = 1_736_467_200;

pub(super) fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Wireless Noise-Cancelling Headphones".to_string(),
            description: "Bluetooth headphones with active noise cancellation, \
                          excellent sound quality and a battery that lasts up to 30 hours"
                .to_string(),
            price: 299.0,
            original_price: Some(399.0),
            discount: Some(25),
            images: vec![
                "https://images.pexels.com/photos/3783471/pexels-photo-3783471.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
                "https://images.pexels.com/photos/1649771/pexels-photo-1649771.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            ],
            category: CategoryId::new("electronics"),
            rating: 4.8,
            reviews_count: 1247,
            in_stock: true,
            is_featured: true,
            affiliate_url: "https://aliexpress.com/item/example1".to_string(),
            specifications: BTreeMap::from([
                ("Connectivity".to_string(), "Bluetooth 5.0".to_string()),
                ("Battery life".to_string(), "30 hours".to_string()),
                ("Noise cancellation".to_string(), "Active ANC".to_string()),
                ("Weight".to_string(), "250g".to_string()),
            ]),
            tags: vec![
                "headphones".to_string(),
                "bluetooth".to_string(),
                "noise-cancelling".to_string(),
            ],
            created_at: JAN_10_2025,
            updated_at: JAN_10_2025,
        },
        Product {
            id: ProductId::new("2"),
            name: "Sport Smartwatch".to_string(),
            description: "Smartwatch with an AMOLED display, health tracking, \
                          built-in GPS and IPX8 water resistance"
                .to_string(),
            price: 450.0,
            original_price: Some(599.0),
            discount: Some(25),
            images: vec![
                "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
                "https://images.pexels.com/photos/1697214/pexels-photo-1697214.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            ],
            category: CategoryId::new("electronics"),
            rating: 4.6,
            reviews_count: 892,
            in_stock: true,
            is_featured: true,
            affiliate_url: "https://aliexpress.com/item/example2".to_string(),
            specifications: BTreeMap::from([
                ("Screen size".to_string(), "1.4 in".to_string()),
                ("Water resistance".to_string(), "IPX8".to_string()),
                ("Battery life".to_string(), "7 days".to_string()),
                ("GPS".to_string(), "Built-in".to_string()),
            ]),
            tags: vec![
                "smartwatch".to_string(),
                "sport".to_string(),
                "health".to_string(),
            ],
            created_at: JAN_09_2025,
            updated_at: JAN_09_2025,
        },
        Product {
            id: ProductId::new("3"),
            name: "Laptop Backpack".to_string(),
            description: "Quality backpack for laptops up to 15.6 inches, \
                          with multiple compartments and water-resistant fabric"
                .to_string(),
            price: 129.0,
            original_price: None,
            discount: None,
            images: vec![
                "https://images.pexels.com/photos/2905238/pexels-photo-2905238.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            ],
            // Dangling on purpose: no "accessories" category exists in the
            // seed, which exercises the weak-reference contract.
            category: CategoryId::new("accessories"),
            rating: 4.4,
            reviews_count: 456,
            in_stock: true,
            is_featured: false,
            affiliate_url: "https://aliexpress.com/item/example3".to_string(),
            specifications: BTreeMap::new(),
            tags: vec![
                "backpack".to_string(),
                "laptop".to_string(),
                "travel".to_string(),
            ],
            created_at: JAN_08_2025,
            updated_at: JAN_08_2025,
        },
    ]
}

pub(super) fn demo_categories() -> Vec<Category> {
    vec![
        demo_category("electronics", "Electronics", "Cutting-edge consumer electronics", "📱", 234),
        demo_category("fashion", "Fashion", "Clothing and fashion accessories", "👕", 567),
        demo_category("home", "Home & Garden", "Products for the home and garden", "🏠", 345),
        demo_category("sports", "Sports", "Sports gear and equipment", "⚽", 189),
        demo_category("beauty", "Beauty & Health", "Beauty and health products", "💄", 278),
        demo_category("toys", "Toys", "Toys and games for kids", "🧸", 123),
    ]
}

fn demo_category(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    products_count: i64,
) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        parent_id: None,
        is_active: true,
        products_count,
        created_at: JAN_01_2025,
    }
}
