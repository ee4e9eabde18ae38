//! Shoplink CLI - storefront and back office for the demo catalog.
//!
//! Commands:
//! - `shoplink browse` - browse the storefront with filters and sorting
//! - `shoplink product` - manage products (admin)
//! - `shoplink category` - manage categories (admin)
//! - `shoplink import` - bulk-import products from a CSV file (admin)
//! - `shoplink stats` - dashboard aggregates (admin)
//! - `shoplink config` - manage site settings
//! - `shoplink login` - verify admin credentials
//!
//! The catalog is seeded from the demo dataset at startup and lives only
//! for the lifetime of the process; nothing is persisted.

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    BrowseArgs, CategoryArgs, ConfigArgs, ImportArgs, LoginArgs, ProductArgs, StatsArgs,
};

/// Shoplink CLI - browse and manage the affiliate storefront catalog
#[derive(Parser)]
#[command(name = "shoplink")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Settings file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the storefront catalog
    Browse(BrowseArgs),

    /// Manage products (admin)
    Product(ProductArgs),

    /// Manage categories (admin)
    Category(CategoryArgs),

    /// Import products from a CSV file (admin)
    Import(ImportArgs),

    /// Show dashboard statistics (admin)
    Stats(StatsArgs),

    /// Manage site settings
    Config(ConfigArgs),

    /// Verify admin credentials
    Login(LoginArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load settings and seed the catalog
    let config_path = cli.config.as_deref();
    let mut ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &mut ctx),
        Commands::Category(args) => commands::category::run(args, &mut ctx),
        Commands::Import(args) => commands::import::run(args, &mut ctx),
        Commands::Stats(args) => commands::stats::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
        Commands::Login(args) => commands::login::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
