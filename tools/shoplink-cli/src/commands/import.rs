//! Bulk-import products from a CSV file.

use anyhow::{Context as _, Result};

use shoplink_import::import_products_from_path;

use super::ImportArgs;
use crate::context::Context;

/// Run the import command.
pub fn run(args: ImportArgs, ctx: &mut Context) -> Result<()> {
    ctx.require_admin(&args.admin)?;

    ctx.output.header("Import products from CSV");
    let before = ctx.store.products().len();

    let spinner = ctx.output.spinner(&format!("Importing {}...", args.file));
    let result = import_products_from_path(&args.file, &mut ctx.store);
    spinner.finish_and_clear();

    let summary =
        result.with_context(|| format!("Import failed for {}", args.file))?;

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    if summary.has_failures() {
        ctx.output.warn(&format!(
            "Import failed for {} products. {} products added successfully.",
            summary.failed, summary.succeeded
        ));
    } else {
        ctx.output.success(&format!(
            "Import completed! {} products added.",
            summary.succeeded
        ));
    }

    ctx.output.kv(
        "catalog size",
        &format!("{} → {}", before, ctx.store.products().len()),
    );
    Ok(())
}
