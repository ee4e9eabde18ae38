//! Browse the storefront catalog.

use anyhow::{bail, Result};

use shoplink_catalog::ids::CategoryId;
use shoplink_catalog::search::{ProductQuery, SortOption};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{format_price, stock_badge, truncate};

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let Some(sort) = SortOption::parse_token(&args.sort) else {
        bail!(
            "Unknown sort order '{}'. Available: popularity, price-low, price-high, rating, newest",
            args.sort
        );
    };

    let per_page = args
        .per_page
        .unwrap_or(ctx.settings.advanced.max_products_per_page);

    let mut query = ProductQuery::new()
        .with_sort(sort)
        .with_pagination(args.page, per_page)
        .with_price_range(args.min_price, args.max_price);

    if let Some(text) = &args.query {
        query = query.with_text(text.clone());
    }
    if let Some(category) = &args.category {
        query = query.with_category(CategoryId::new(category.clone()));
    }
    if args.in_stock {
        query = query.in_stock_only();
    }

    let results = query.execute(ctx.store.products());

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} — {}",
        ctx.settings.general.site_name,
        sort.display_name()
    ));

    if results.is_empty() {
        ctx.output.info("No products match the current filters");
        return Ok(());
    }

    let symbol = ctx.settings.general.currency_symbol();
    let widths = [36, 16, 12, 10];
    ctx.output
        .table_row(&["NAME", "PRICE", "RATING", "STOCK"], &widths);

    for product in &results.items {
        let price = match product.original_price {
            Some(original) if original > product.price => format!(
                "{} (was {})",
                format_price(symbol, product.price),
                format_price(symbol, original)
            ),
            _ => format_price(symbol, product.price),
        };
        let rating = format!("★{} ({})", product.rating, product.reviews_count);

        ctx.output.table_row(
            &[
                &truncate(&product.name, widths[0]),
                &price,
                &rating,
                &stock_badge(product.in_stock),
            ],
            &widths,
        );
    }

    let p = &results.pagination;
    ctx.output.info(&format!(
        "Showing {}-{} of {} products (page {}/{})",
        p.start_item(),
        p.end_item(),
        p.total,
        p.page,
        p.total_pages
    ));

    Ok(())
}
