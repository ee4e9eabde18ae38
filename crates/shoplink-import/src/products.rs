//! Product row parsing and import.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use shoplink_catalog::catalog::{CatalogStore, NewProduct};
use shoplink_catalog::ids::CategoryId;

use crate::ImportError;

/// Tally of an import run, produced after the whole source is consumed.
///
/// This is the only result exposed to the caller; which specific rows
/// failed is reported through `tracing` warnings only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Rows appended to the catalog.
    pub succeeded: usize,
    /// Rows skipped (parse failure or unknown category).
    pub failed: usize,
}

impl ImportSummary {
    /// Total number of data rows seen.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Check whether any row was skipped.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// One raw CSV record.
///
/// Column names follow the admin panel's export convention; the title
/// column accepts either `product_name` or `name`. The `category` column
/// carries a category NAME (not id) and is resolved against the store.
#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(alias = "product_name")]
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    category: String,
    #[serde(rename = "affiliateUrl", default)]
    affiliate_url: String,
    #[serde(default)]
    images: String,
    #[serde(rename = "originalPrice", default)]
    original_price: Option<f64>,
    #[serde(rename = "inStock", default)]
    in_stock: Option<String>,
    #[serde(rename = "isFeatured", default)]
    is_featured: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(rename = "reviewsCount", default)]
    reviews_count: Option<u32>,
    #[serde(default)]
    tags: Option<String>,
}

impl ProductRow {
    fn into_new_product(self, category: CategoryId) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            discount: None,
            images: split_list(&self.images),
            category,
            rating: self.rating.unwrap_or(0.0),
            reviews_count: self.reviews_count.unwrap_or(0),
            in_stock: parse_flag(self.in_stock.as_deref(), true),
            is_featured: parse_flag(self.is_featured.as_deref(), false),
            affiliate_url: self.affiliate_url,
            specifications: Default::default(),
            tags: self.tags.as_deref().map(split_list).unwrap_or_default(),
        }
    }
}

/// Parse a case-insensitive `true`/`false` token, treating an absent or
/// empty field as the given default.
fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        None | Some("") => default,
        Some(token) => token.eq_ignore_ascii_case("true"),
    }
}

/// Split a comma-delimited field into trimmed, non-empty entries.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Import products from a CSV source into the store.
///
/// The first line must be a header row. Each data row becomes one
/// `add_product` call with the usual id/date-stamp assignment. Rows that
/// cannot be converted are skipped and counted; the import itself only
/// fails when the source cannot be read.
pub fn import_products<R: Read>(
    source: R,
    store: &mut CatalogStore,
) -> Result<ImportSummary, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut summary = ImportSummary::default();

    for record in reader.deserialize::<ProductRow>() {
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(error = %err, "Skipping malformed row");
                summary.failed += 1;
                continue;
            }
        };

        let category_id = match store.find_category_by_name(&row.category) {
            Some(category) => category.id.clone(),
            None => {
                tracing::warn!(
                    product = %row.name,
                    category = %row.category,
                    "Category not found for product, skipping row"
                );
                summary.failed += 1;
                continue;
            }
        };

        store.add_product(row.into_new_product(category_id));
        summary.succeeded += 1;
    }

    tracing::debug!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Import finished"
    );

    Ok(summary)
}

/// Import products from a CSV file on disk.
pub fn import_products_from_path(
    path: impl AsRef<Path>,
    store: &mut CatalogStore,
) -> Result<ImportSummary, ImportError> {
    let file = File::open(path).map_err(ImportError::Open)?;
    import_products(file, store)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "product_name,description,price,category,affiliateUrl,images,originalPrice,inStock,isFeatured,rating,reviewsCount,tags";

    fn import(csv_body: &str) -> (CatalogStore, ImportSummary) {
        let mut store = CatalogStore::with_demo_data();
        let summary = import_products(csv_body.as_bytes(), &mut store).unwrap();
        (store, summary)
    }

    #[test]
    fn valid_rows_are_appended() {
        let csv = format!(
            "{HEADER}\n\
             USB-C Hub,7-in-1 hub,89.90,Electronics,https://ali.example/1,https://img/1.jpg,119.90,true,false,4.5,320,\"usb, hub\"\n\
             Desk Lamp,LED lamp,45,Home & Garden,https://ali.example/2,https://img/2.jpg,,,,,,\n"
        );
        let (store, summary) = import(&csv);

        assert_eq!(summary, ImportSummary { succeeded: 2, failed: 0 });
        assert_eq!(store.products().len(), 5);

        let hub = store
            .products()
            .iter()
            .find(|p| p.name == "USB-C Hub")
            .unwrap();
        assert_eq!(hub.price, 89.90);
        assert_eq!(hub.original_price, Some(119.90));
        assert_eq!(hub.category.as_str(), "electronics");
        assert_eq!(hub.rating, 4.5);
        assert_eq!(hub.reviews_count, 320);
        assert_eq!(hub.tags, vec!["usb", "hub"]);
        assert!(hub.in_stock);
        assert!(!hub.is_featured);
        assert_eq!(hub.created_at, hub.updated_at);
    }

    #[test]
    fn unknown_category_rows_are_counted_not_imported() {
        let mut rows = String::from(HEADER);
        for i in 0..5 {
            rows.push_str(&format!(
                "\nItem {i},desc,10,Electronics,https://ali.example/{i},img,,,,,,"
            ));
        }
        rows.push_str("\nGhost 1,desc,10,Nonexistent,https://ali.example/g1,img,,,,,,");
        rows.push_str("\nGhost 2,desc,10,Nonexistent,https://ali.example/g2,img,,,,,,");

        let (store, summary) = import(&rows);

        assert_eq!(summary, ImportSummary { succeeded: 5, failed: 2 });
        // Exactly the five valid rows were appended to the demo set of 3.
        assert_eq!(store.products().len(), 8);
        assert!(!store.products().iter().any(|p| p.name.starts_with("Ghost")));
    }

    #[test]
    fn category_name_matching_is_case_insensitive() {
        let csv = format!(
            "{HEADER}\n\
             Gadget,desc,10,ELECTRONICS,https://ali.example/1,img,,,,,,\n"
        );
        let (store, summary) = import(&csv);

        assert_eq!(summary.succeeded, 1);
        let gadget = store.products().iter().find(|p| p.name == "Gadget").unwrap();
        assert_eq!(gadget.category.as_str(), "electronics");
    }

    #[test]
    fn malformed_numeric_field_fails_only_that_row() {
        let csv = format!(
            "{HEADER}\n\
             Bad Price,desc,not-a-number,Electronics,https://ali.example/1,img,,,,,,\n\
             Good,desc,12.5,Electronics,https://ali.example/2,img,,,,,,\n"
        );
        let (store, summary) = import(&csv);

        assert_eq!(summary, ImportSummary { succeeded: 1, failed: 1 });
        assert!(store.products().iter().any(|p| p.name == "Good"));
    }

    #[test]
    fn wrong_column_count_fails_only_that_row() {
        let csv = format!(
            "{HEADER}\n\
             short,row\n\
             Good,desc,12.5,Electronics,https://ali.example/2,img,,,,,,\n"
        );
        let (_, summary) = import(&csv);
        assert_eq!(summary, ImportSummary { succeeded: 1, failed: 1 });
    }

    #[test]
    fn flags_default_and_parse_case_insensitively() {
        let csv = format!(
            "{HEADER}\n\
             Defaults,desc,10,Electronics,https://ali.example/1,img,,,,,,\n\
             Flags,desc,10,Electronics,https://ali.example/2,img,,FALSE,TRUE,,,\n"
        );
        let (store, summary) = import(&csv);
        assert_eq!(summary.succeeded, 2);

        let defaults = store.products().iter().find(|p| p.name == "Defaults").unwrap();
        assert!(defaults.in_stock);
        assert!(!defaults.is_featured);
        assert_eq!(defaults.rating, 0.0);
        assert_eq!(defaults.reviews_count, 0);
        assert!(defaults.tags.is_empty());

        let flags = store.products().iter().find(|p| p.name == "Flags").unwrap();
        assert!(!flags.in_stock);
        assert!(flags.is_featured);
    }

    #[test]
    fn images_and_tags_are_split_and_trimmed() {
        let csv = format!(
            "{HEADER}\n\
             Multi,desc,10,Electronics,https://ali.example/1,\" https://img/a.jpg , https://img/b.jpg \",,,,,,\" a, b ,c \"\n"
        );
        let (store, _) = import(&csv);

        let multi = store.products().iter().find(|p| p.name == "Multi").unwrap();
        assert_eq!(multi.images, vec!["https://img/a.jpg", "https://img/b.jpg"]);
        assert_eq!(multi.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn name_header_is_accepted_in_place_of_product_name() {
        let csv = "name,description,price,category,affiliateUrl,images\n\
                   Plain Name,desc,10,Electronics,https://ali.example/1,img\n";
        let (store, summary) = import(csv);

        assert_eq!(summary.succeeded, 1);
        assert!(store.products().iter().any(|p| p.name == "Plain Name"));
    }

    #[test]
    fn quoted_fields_with_commas_parse_per_csv_rules() {
        let csv = format!(
            "{HEADER}\n\
             \"Cable, braided\",\"Long, durable cable\",15,Electronics,https://ali.example/1,img,,,,,,\n"
        );
        let (store, summary) = import(&csv);

        assert_eq!(summary.succeeded, 1);
        assert!(store.products().iter().any(|p| p.name == "Cable, braided"));
    }

    #[test]
    fn empty_input_with_header_only_imports_nothing() {
        let (store, summary) = import(&format!("{HEADER}\n"));
        assert_eq!(summary, ImportSummary::default());
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn missing_file_is_a_hard_error() {
        let mut store = CatalogStore::new();
        let result = import_products_from_path("/definitely/not/here.csv", &mut store);
        assert!(matches!(result, Err(ImportError::Open(_))));
    }
}
