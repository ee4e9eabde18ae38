//! Site settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Site settings file (`shoplink.toml`).
///
/// A pass-through configuration bag: it backs the admin settings form and
/// supplies display defaults (site name, currency symbol, page size), but
/// has no effect on catalog semantics. The API keys are placeholders for an
/// integration that does not exist yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    /// General site settings.
    #[serde(default)]
    pub general: GeneralSettings,

    /// AliExpress / translation API settings.
    #[serde(default)]
    pub api: ApiSettings,

    /// Color theme.
    #[serde(default)]
    pub design: DesignSettings,

    /// SEO metadata.
    #[serde(default)]
    pub seo: SeoSettings,

    /// Advanced toggles.
    #[serde(default)]
    pub advanced: AdvancedSettings,
}

impl SiteSettings {
    /// Load settings from a file. TOML by default, JSON for `.json` paths.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON settings: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML settings: {}", path))
        }
    }

    /// Save settings to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings file: {}", path))
    }
}

/// General site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub site_name: String,
    pub site_description: String,
    pub default_language: String,
    /// ISO currency code shown on prices.
    pub currency: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            site_name: "Product World".to_string(),
            site_description: "Advanced affiliate storefront for AliExpress products".to_string(),
            default_language: "en".to_string(),
            currency: "ILS".to_string(),
        }
    }
}

impl GeneralSettings {
    /// Display symbol for the configured currency.
    pub fn currency_symbol(&self) -> &str {
        match self.currency.as_str() {
            "ILS" => "₪",
            "USD" => "$",
            "EUR" => "€",
            other => other,
        }
    }
}

/// Marketplace and translation API settings. Stored but unused: there is no
/// live integration behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub aliexpress_api_key: String,
    pub aliexpress_secret_key: String,
    pub affiliate_id: String,
    pub translation_api_key: String,
    pub auto_translate: bool,
    pub target_language: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            aliexpress_api_key: String::new(),
            aliexpress_secret_key: String::new(),
            affiliate_id: String::new(),
            translation_api_key: String::new(),
            auto_translate: true,
            target_language: "en".to_string(),
        }
    }
}

/// Color theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            primary_color: "#3B82F6".to_string(),
            secondary_color: "#8B5CF6".to_string(),
            accent_color: "#F59E0B".to_string(),
        }
    }
}

/// SEO metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSettings {
    pub meta_title: String,
    pub meta_description: String,
    pub google_analytics_id: String,
}

impl Default for SeoSettings {
    fn default() -> Self {
        Self {
            meta_title: "Product World - the best online store".to_string(),
            meta_description: "Discover thousands of quality products at great prices"
                .to_string(),
            google_analytics_id: String::new(),
        }
    }
}

/// Advanced toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedSettings {
    pub cache_enabled: bool,
    pub auto_import: bool,
    pub max_products_per_page: i64,
    pub enable_notifications: bool,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            auto_import: false,
            max_products_per_page: 20,
            enable_notifications: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_settings_form() {
        let settings = SiteSettings::default();
        assert_eq!(settings.general.site_name, "Product World");
        assert_eq!(settings.general.currency, "ILS");
        assert_eq!(settings.general.currency_symbol(), "₪");
        assert!(settings.api.auto_translate);
        assert_eq!(settings.design.primary_color, "#3B82F6");
        assert!(settings.advanced.cache_enabled);
        assert_eq!(settings.advanced.max_products_per_page, 20);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let settings: SiteSettings = toml::from_str(
            r#"
            [general]
            site_name = "Deal Hunter"
            currency = "USD"
            "#,
        )
        .unwrap();

        assert_eq!(settings.general.site_name, "Deal Hunter");
        assert_eq!(settings.general.currency_symbol(), "$");
        // Untouched sections keep their defaults.
        assert_eq!(settings.advanced.max_products_per_page, 20);
        assert_eq!(settings.general.default_language, "en");
    }

    #[test]
    fn toml_round_trip() {
        let settings = SiteSettings::default();
        let encoded = toml::to_string_pretty(&settings).unwrap();
        let decoded: SiteSettings = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded.general.site_name, settings.general.site_name);
        assert_eq!(decoded.advanced.auto_import, settings.advanced.auto_import);
    }
}
