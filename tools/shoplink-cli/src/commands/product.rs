//! Product management commands.

use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::Confirm;

use shoplink_catalog::catalog::{NewProduct, ProductPatch};
use shoplink_catalog::ids::{CategoryId, ProductId};
use shoplink_catalog::search::{Filter, ProductQuery};

use super::{ProductArgs, ProductCommand};
use crate::context::Context;
use crate::output::{format_date, format_price, stock_badge, truncate};

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &mut Context) -> Result<()> {
    ctx.require_admin(&args.admin)?;

    match args.command {
        ProductCommand::List { query, category } => list(query, category, ctx),
        ProductCommand::Add {
            name,
            description,
            price,
            category,
            affiliate_url,
            original_price,
            images,
            rating,
            reviews_count,
            out_of_stock,
            featured,
            tags,
        } => {
            let mut draft = NewProduct::new(
                name,
                description,
                price,
                CategoryId::new(category),
                affiliate_url,
            )
            .with_images(images)
            .with_rating(rating, reviews_count)
            .with_tags(tags);

            if let Some(original) = original_price {
                draft = draft.with_original_price(original);
            }
            if featured {
                draft = draft.featured();
            }
            if out_of_stock {
                draft = draft.out_of_stock();
            }

            add(draft, ctx)
        }
        ProductCommand::Update {
            id,
            name,
            description,
            price,
            original_price,
            category,
            affiliate_url,
            rating,
            reviews_count,
            in_stock,
            featured,
            images,
            tags,
        } => {
            let patch = ProductPatch {
                name,
                description,
                price,
                original_price,
                discount: None,
                images,
                category: category.map(CategoryId::new),
                rating,
                reviews_count,
                in_stock,
                is_featured: featured,
                affiliate_url,
                specifications: None,
                tags,
            };
            update(&ProductId::new(id), patch, ctx)
        }
        ProductCommand::Remove { id, yes } => remove(&ProductId::new(id), yes, ctx),
    }
}

fn list(query: Option<String>, category: Option<String>, ctx: &Context) -> Result<()> {
    let mut search = ProductQuery::new().with_pagination(1, 100);
    if let Some(text) = query {
        search = search.with_text(text);
    }
    if let Some(id) = category {
        search = search.with_filter(Filter::category(CategoryId::new(id)));
    }

    let results = search.execute(ctx.store.products());

    if ctx.output.is_json() {
        ctx.output.json(&results.items);
        return Ok(());
    }

    ctx.output.header("Products");
    let symbol = ctx.settings.general.currency_symbol();
    let widths = [14, 30, 16, 10, 12, 10];
    ctx.output.table_row(
        &["ID", "NAME", "CATEGORY", "PRICE", "RATING", "STOCK"],
        &widths,
    );

    for product in &results.items {
        let category = ctx
            .store
            .category(&product.category)
            .map(|c| format!("{} {}", c.icon, c.name))
            .unwrap_or_else(|| product.category.to_string());
        let rating = format!("★{} ({})", product.rating, product.reviews_count);

        ctx.output.table_row(
            &[
                &truncate(product.id.as_str(), widths[0]),
                &truncate(&product.name, widths[1]),
                &truncate(&category, widths[2]),
                &format_price(symbol, product.price),
                &rating,
                &stock_badge(product.in_stock),
            ],
            &widths,
        );
    }

    ctx.output
        .info(&format!("{} products found", results.pagination.total));
    Ok(())
}

fn add(draft: NewProduct, ctx: &mut Context) -> Result<()> {
    if ctx.store.category(&draft.category).is_none() {
        ctx.output.warn(&format!(
            "Category '{}' does not exist; the product will not appear on any category page",
            draft.category
        ));
    }

    let product = ctx.store.add_product(draft).clone();

    ctx.output
        .success(&format!("Added product '{}'", product.name));
    ctx.output.kv("id", product.id.as_str());
    if let Some(discount) = product.discount {
        ctx.output.kv("discount", &format!("{}%", discount));
    }
    ctx.output.kv("created", &format_date(product.created_at));
    ctx.output
        .kv("catalog size", &ctx.store.products().len().to_string());

    if ctx.output.is_json() {
        ctx.output.json(&product);
    }
    Ok(())
}

fn update(id: &ProductId, patch: ProductPatch, ctx: &mut Context) -> Result<()> {
    if patch.is_empty() {
        bail!("Nothing to update: pass at least one field flag");
    }

    let product = ctx
        .store
        .update_product(id, patch)
        .with_context(|| format!("Failed to update product {}", id))?
        .clone();

    ctx.output
        .success(&format!("Updated product '{}'", product.name));
    ctx.output.kv("updated", &format_date(product.updated_at));

    if ctx.output.is_json() {
        ctx.output.json(&product);
    }
    Ok(())
}

fn remove(id: &ProductId, yes: bool, ctx: &mut Context) -> Result<()> {
    let name = ctx
        .store
        .product(id)
        .map(|p| p.name.clone())
        .ok_or_else(|| anyhow!("Product not found: {}", id))?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete product '{}'?", name))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    ctx.store
        .delete_product(id)
        .with_context(|| format!("Failed to delete product {}", id))?;

    ctx.output.success(&format!("Deleted product '{}'", name));
    ctx.output
        .kv("catalog size", &ctx.store.products().len().to_string());
    Ok(())
}
