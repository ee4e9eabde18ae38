//! CLI command implementations.

pub mod browse;
pub mod category;
pub mod config;
pub mod import;
pub mod login;
pub mod product;
pub mod stats;

use clap::{Args, Subcommand};

/// Credentials for admin-gated commands.
#[derive(Args)]
pub struct AdminOpts {
    /// Admin username.
    #[arg(long, default_value = "admin")]
    pub username: String,

    /// Admin password (falls back to SHOPLINK_ADMIN_PASSWORD, then a
    /// prompt).
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Free-text search over product names and descriptions.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only show products from this category id.
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum price (inclusive).
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price (inclusive).
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only show in-stock products.
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order: popularity, price-low, price-high, rating, newest.
    #[arg(short, long, default_value = "popularity")]
    pub sort: String,

    /// Page to show (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: i64,

    /// Items per page (defaults to the configured page size).
    #[arg(long)]
    pub per_page: Option<i64>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    #[command(flatten)]
    pub admin: AdminOpts,

    #[command(subcommand)]
    pub command: ProductCommand,
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// List products with an optional search term.
    List {
        /// Search term over name and description.
        #[arg(short, long)]
        query: Option<String>,

        /// Only show products from this category id.
        #[arg(long)]
        category: Option<String>,
    },

    /// Add a new product.
    Add {
        /// Product name.
        name: String,

        /// Product description.
        #[arg(long)]
        description: String,

        /// Current price.
        #[arg(long)]
        price: f64,

        /// Category id.
        #[arg(long)]
        category: String,

        /// Affiliate URL to redirect buyers to.
        #[arg(long)]
        affiliate_url: String,

        /// Original price before discount.
        #[arg(long)]
        original_price: Option<f64>,

        /// Image URLs, comma-separated.
        #[arg(long, value_delimiter = ',')]
        images: Vec<String>,

        /// Initial rating.
        #[arg(long, default_value_t = 5.0)]
        rating: f64,

        /// Initial review count.
        #[arg(long, default_value_t = 0)]
        reviews_count: u32,

        /// Mark the product as out of stock.
        #[arg(long)]
        out_of_stock: bool,

        /// Feature the product on the home page.
        #[arg(long)]
        featured: bool,

        /// Tags, comma-separated.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Update fields of an existing product.
    Update {
        /// Product id.
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        original_price: Option<f64>,

        /// Category id.
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        affiliate_url: Option<String>,

        #[arg(long)]
        rating: Option<f64>,

        #[arg(long)]
        reviews_count: Option<u32>,

        /// true/false.
        #[arg(long)]
        in_stock: Option<bool>,

        /// true/false.
        #[arg(long)]
        featured: Option<bool>,

        /// Image URLs, comma-separated.
        #[arg(long, value_delimiter = ',')]
        images: Option<Vec<String>>,

        /// Tags, comma-separated.
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },

    /// Remove a product.
    Remove {
        /// Product id.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    #[command(flatten)]
    pub admin: AdminOpts,

    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// List categories with stored and live product counts.
    List,

    /// Add a new category.
    Add {
        /// Category name.
        name: String,

        /// Category description.
        #[arg(long)]
        description: String,

        /// Display icon (usually an emoji).
        #[arg(long, default_value = "🛍️")]
        icon: String,

        /// Parent category id.
        #[arg(long)]
        parent: Option<String>,

        /// Hide the category from the storefront.
        #[arg(long)]
        inactive: bool,
    },

    /// Update fields of an existing category.
    Update {
        /// Category id.
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        /// true/false.
        #[arg(long)]
        active: Option<bool>,
    },

    /// Remove a category. Refused while products still reference it.
    Remove {
        /// Category id.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// Path to the CSV file. The first column should be `product_name` and
    /// category names must match existing categories.
    pub file: String,

    #[command(flatten)]
    pub admin: AdminOpts,
}

/// Arguments for the stats command.
#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub admin: AdminOpts,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    #[command(flatten)]
    pub admin: AdminOpts,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current settings.
    Show,

    /// Get a settings value.
    Get {
        /// Settings key (dot-separated, e.g. general.site_name).
        key: String,
    },

    /// Set a settings value.
    Set {
        /// Settings key (dot-separated).
        key: String,

        /// Value to set.
        value: String,
    },

    /// Initialize a new settings file.
    Init {
        /// Force overwrite of an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
