//! Dashboard statistics.

use anyhow::Result;

use shoplink_catalog::search::{live_product_count, recent_products, top_categories, CatalogStats};

use super::StatsArgs;
use crate::context::Context;
use crate::output::format_price;

/// Run the stats command.
pub fn run(args: StatsArgs, ctx: &Context) -> Result<()> {
    ctx.require_admin(&args.admin)?;

    let stats = CatalogStats::compute(&ctx.store);

    if ctx.output.is_json() {
        ctx.output.json(&stats);
        return Ok(());
    }

    ctx.output.header("Dashboard");
    ctx.output
        .kv("total products", &stats.total_products.to_string());
    ctx.output
        .kv("in stock", &stats.in_stock_products.to_string());
    ctx.output
        .kv("featured", &stats.featured_products.to_string());
    ctx.output
        .kv("categories", &stats.total_categories.to_string());
    ctx.output
        .kv("active categories", &stats.active_categories.to_string());
    ctx.output
        .kv("average rating", &format!("{:.1}", stats.average_rating));

    let symbol = ctx.settings.general.currency_symbol();

    ctx.output.header("Recently added");
    for product in recent_products(ctx.store.products(), 5) {
        ctx.output.list_item(&format!(
            "{} — {}",
            product.name,
            format_price(symbol, product.price)
        ));
    }

    ctx.output.header("Top categories");
    for category in top_categories(ctx.store.categories(), 5) {
        // The stored counter is the upstream marketplace size; the live
        // number in parentheses is what the local catalog actually holds.
        let live = live_product_count(ctx.store.products(), &category.id);
        ctx.output.list_item(&format!(
            "{} {} — {} products ({} local)",
            category.icon, category.name, category.products_count, live
        ));
    }

    Ok(())
}
