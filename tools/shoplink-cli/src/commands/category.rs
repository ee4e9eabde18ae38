//! Category management commands.

use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::Confirm;

use shoplink_catalog::catalog::{CategoryPatch, NewCategory};
use shoplink_catalog::ids::CategoryId;
use shoplink_catalog::search::live_product_count;

use super::{CategoryArgs, CategoryCommand};
use crate::context::Context;
use crate::output::truncate;

/// Run the category command.
pub fn run(args: CategoryArgs, ctx: &mut Context) -> Result<()> {
    ctx.require_admin(&args.admin)?;

    match args.command {
        CategoryCommand::List => list(ctx),
        CategoryCommand::Add {
            name,
            description,
            icon,
            parent,
            inactive,
        } => {
            let mut draft = NewCategory::new(name, description, icon);
            if let Some(parent) = parent {
                draft = draft.with_parent(CategoryId::new(parent));
            }
            if inactive {
                draft = draft.inactive();
            }
            add(draft, ctx)
        }
        CategoryCommand::Update {
            id,
            name,
            description,
            icon,
            active,
        } => {
            let patch = CategoryPatch {
                name,
                description,
                icon,
                parent_id: None,
                is_active: active,
            };
            update(&CategoryId::new(id), patch, ctx)
        }
        CategoryCommand::Remove { id, yes } => remove(&CategoryId::new(id), yes, ctx),
    }
}

fn list(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.store.categories());
        return Ok(());
    }

    ctx.output.header("Categories");
    let widths = [14, 24, 10, 8, 10];
    ctx.output.table_row(
        &["ID", "NAME", "STORED", "LIVE", "STATUS"],
        &widths,
    );

    for category in ctx.store.categories() {
        // STORED is the denormalized marketplace counter; LIVE is computed
        // from the products actually in the catalog.
        let live = live_product_count(ctx.store.products(), &category.id);
        let status = if category.is_active { "active" } else { "hidden" };

        ctx.output.table_row(
            &[
                &truncate(category.id.as_str(), widths[0]),
                &truncate(&format!("{} {}", category.icon, category.name), widths[1]),
                &category.products_count.to_string(),
                &live.to_string(),
                status,
            ],
            &widths,
        );
    }

    ctx.output
        .info(&format!("{} categories found", ctx.store.categories().len()));
    Ok(())
}

fn add(draft: NewCategory, ctx: &mut Context) -> Result<()> {
    let category = ctx.store.add_category(draft).clone();

    ctx.output
        .success(&format!("Added category '{}'", category.name));
    ctx.output.kv("id", category.id.as_str());

    if ctx.output.is_json() {
        ctx.output.json(&category);
    }
    Ok(())
}

fn update(id: &CategoryId, patch: CategoryPatch, ctx: &mut Context) -> Result<()> {
    let category = ctx
        .store
        .update_category(id, patch)
        .with_context(|| format!("Failed to update category {}", id))?
        .clone();

    ctx.output
        .success(&format!("Updated category '{}'", category.name));

    if ctx.output.is_json() {
        ctx.output.json(&category);
    }
    Ok(())
}

fn remove(id: &CategoryId, yes: bool, ctx: &mut Context) -> Result<()> {
    let name = ctx
        .store
        .category(id)
        .map(|c| c.name.clone())
        .ok_or_else(|| anyhow!("Category not found: {}", id))?;

    // The store itself performs no referential check; this guard is the
    // back office's contract.
    let referencing = live_product_count(ctx.store.products(), id);
    if referencing > 0 {
        bail!(
            "Cannot delete category '{}': {} products still reference it. \
             Move them to another category first.",
            name,
            referencing
        );
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete category '{}'?", name))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    ctx.store
        .delete_category(id)
        .with_context(|| format!("Failed to delete category {}", id))?;

    ctx.output.success(&format!("Deleted category '{}'", name));
    Ok(())
}
