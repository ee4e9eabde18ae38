//! Settings management commands.

use std::path::Path;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::SiteSettings;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Get { key } => get(&key, ctx),
        ConfigCommand::Set { key, value } => set(&key, &value, ctx),
        ConfigCommand::Init { force } => init(force, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    ctx.output.header("Site Settings");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.settings);
        return Ok(());
    }

    let s = &ctx.settings;

    ctx.output.info("");
    ctx.output.info("[general]");
    ctx.output.kv("site_name", &s.general.site_name);
    ctx.output.kv("site_description", &s.general.site_description);
    ctx.output.kv("default_language", &s.general.default_language);
    ctx.output.kv("currency", &s.general.currency);

    ctx.output.info("");
    ctx.output.info("[api]");
    ctx.output.kv("affiliate_id", &mask(&s.api.affiliate_id));
    ctx.output
        .kv("aliexpress_api_key", &mask(&s.api.aliexpress_api_key));
    ctx.output.kv("auto_translate", &s.api.auto_translate.to_string());
    ctx.output.kv("target_language", &s.api.target_language);

    ctx.output.info("");
    ctx.output.info("[design]");
    ctx.output.kv("primary_color", &s.design.primary_color);
    ctx.output.kv("secondary_color", &s.design.secondary_color);
    ctx.output.kv("accent_color", &s.design.accent_color);

    ctx.output.info("");
    ctx.output.info("[seo]");
    ctx.output.kv("meta_title", &s.seo.meta_title);
    ctx.output.kv("meta_description", &s.seo.meta_description);
    if !s.seo.google_analytics_id.is_empty() {
        ctx.output.kv("google_analytics_id", &s.seo.google_analytics_id);
    }

    ctx.output.info("");
    ctx.output.info("[advanced]");
    ctx.output
        .kv("cache_enabled", &s.advanced.cache_enabled.to_string());
    ctx.output
        .kv("auto_import", &s.advanced.auto_import.to_string());
    ctx.output.kv(
        "max_products_per_page",
        &s.advanced.max_products_per_page.to_string(),
    );
    ctx.output.kv(
        "enable_notifications",
        &s.advanced.enable_notifications.to_string(),
    );

    Ok(())
}

fn get(key: &str, ctx: &Context) -> Result<()> {
    let value = get_settings_value(&ctx.settings, key)?;

    if ctx.output.is_json() {
        println!(r#"{{"key": "{}", "value": {}}}"#, key, value);
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let settings_path = find_settings_file(&ctx.cwd)?;

    let mut settings = SiteSettings::load(&settings_path)?;
    set_settings_value(&mut settings, key, value)?;
    settings.save(&settings_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));
    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let settings_path = ctx.cwd.join("shoplink.toml");

    if settings_path.exists() && !force {
        bail!(
            "Settings file already exists: {}. Use --force to overwrite.",
            settings_path.display()
        );
    }

    SiteSettings::default().save(&settings_path.to_string_lossy())?;
    ctx.output
        .success(&format!("Created: {}", settings_path.display()));
    Ok(())
}

/// Hide secrets in listings.
fn mask(value: &str) -> String {
    if value.is_empty() {
        "(not set)".to_string()
    } else {
        "********".to_string()
    }
}

fn get_settings_value(settings: &SiteSettings, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "site_name"] => Ok(quoted(&settings.general.site_name)),
        ["general", "site_description"] => Ok(quoted(&settings.general.site_description)),
        ["general", "default_language"] => Ok(quoted(&settings.general.default_language)),
        ["general", "currency"] => Ok(quoted(&settings.general.currency)),
        ["api", "affiliate_id"] => Ok(quoted(&settings.api.affiliate_id)),
        ["api", "auto_translate"] => Ok(settings.api.auto_translate.to_string()),
        ["api", "target_language"] => Ok(quoted(&settings.api.target_language)),
        ["design", "primary_color"] => Ok(quoted(&settings.design.primary_color)),
        ["design", "secondary_color"] => Ok(quoted(&settings.design.secondary_color)),
        ["design", "accent_color"] => Ok(quoted(&settings.design.accent_color)),
        ["seo", "meta_title"] => Ok(quoted(&settings.seo.meta_title)),
        ["seo", "meta_description"] => Ok(quoted(&settings.seo.meta_description)),
        ["seo", "google_analytics_id"] => Ok(quoted(&settings.seo.google_analytics_id)),
        ["advanced", "cache_enabled"] => Ok(settings.advanced.cache_enabled.to_string()),
        ["advanced", "auto_import"] => Ok(settings.advanced.auto_import.to_string()),
        ["advanced", "max_products_per_page"] => {
            Ok(settings.advanced.max_products_per_page.to_string())
        }
        ["advanced", "enable_notifications"] => {
            Ok(settings.advanced.enable_notifications.to_string())
        }
        _ => bail!("Unknown settings key: {}", key),
    }
}

fn set_settings_value(settings: &mut SiteSettings, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "site_name"] => settings.general.site_name = value.to_string(),
        ["general", "site_description"] => settings.general.site_description = value.to_string(),
        ["general", "default_language"] => settings.general.default_language = value.to_string(),
        ["general", "currency"] => settings.general.currency = value.to_string(),
        ["api", "aliexpress_api_key"] => settings.api.aliexpress_api_key = value.to_string(),
        ["api", "aliexpress_secret_key"] => {
            settings.api.aliexpress_secret_key = value.to_string()
        }
        ["api", "affiliate_id"] => settings.api.affiliate_id = value.to_string(),
        ["api", "translation_api_key"] => settings.api.translation_api_key = value.to_string(),
        ["api", "auto_translate"] => settings.api.auto_translate = value.parse()?,
        ["api", "target_language"] => settings.api.target_language = value.to_string(),
        ["design", "primary_color"] => settings.design.primary_color = value.to_string(),
        ["design", "secondary_color"] => settings.design.secondary_color = value.to_string(),
        ["design", "accent_color"] => settings.design.accent_color = value.to_string(),
        ["seo", "meta_title"] => settings.seo.meta_title = value.to_string(),
        ["seo", "meta_description"] => settings.seo.meta_description = value.to_string(),
        ["seo", "google_analytics_id"] => settings.seo.google_analytics_id = value.to_string(),
        ["advanced", "cache_enabled"] => settings.advanced.cache_enabled = value.parse()?,
        ["advanced", "auto_import"] => settings.advanced.auto_import = value.parse()?,
        ["advanced", "max_products_per_page"] => {
            settings.advanced.max_products_per_page = value.parse()?
        }
        ["advanced", "enable_notifications"] => {
            settings.advanced.enable_notifications = value.parse()?
        }
        _ => bail!("Unknown or read-only settings key: {}", key),
    }

    Ok(())
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

fn find_settings_file(cwd: &Path) -> Result<String> {
    for name in &["shoplink.toml", ".shoplink.toml", "shoplink.json"] {
        let path = cwd.join(name);
        if path.exists() {
            return Ok(path.to_string_lossy().to_string());
        }
    }
    bail!("No settings file found. Run `shoplink config init` to create one.")
}
