//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use shoplink_auth::{AdminGate, AdminSession};
use shoplink_catalog::catalog::CatalogStore;

use crate::commands::AdminOpts;
use crate::config::SiteSettings;
use crate::output::Output;

/// Environment variable consulted for the admin password before prompting.
const PASSWORD_ENV: &str = "SHOPLINK_ADMIN_PASSWORD";

/// Execution context for CLI commands.
///
/// Owns the catalog store for the lifetime of the process and hands it to
/// commands as an explicit reference. The store is seeded from the demo
/// dataset on every start; there is no catalog persistence.
pub struct Context {
    /// The in-memory catalog.
    pub store: CatalogStore,
    /// Site settings.
    pub settings: SiteSettings,
    /// Admin credential gate.
    pub gate: AdminGate,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, seeding the catalog and discovering a settings file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let settings = if let Some(path) = config_path {
            SiteSettings::load(path)?
        } else {
            Self::find_settings(&cwd).unwrap_or_default()
        };

        Ok(Self {
            store: CatalogStore::with_demo_data(),
            settings,
            gate: AdminGate::default(),
            output,
            cwd,
        })
    }

    /// Find a settings file in the directory tree.
    fn find_settings(start: &Path) -> Option<SiteSettings> {
        let settings_names = ["shoplink.toml", ".shoplink.toml", "shoplink.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &settings_names {
                let path = current.join(name);
                if path.exists() {
                    if let Ok(settings) = SiteSettings::load(path.to_str()?) {
                        return Some(settings);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Authenticate before an admin command runs.
    ///
    /// The password comes from the `--password` flag, the
    /// `SHOPLINK_ADMIN_PASSWORD` environment variable, or an interactive
    /// prompt, in that order.
    pub fn require_admin(&self, opts: &AdminOpts) -> Result<AdminSession> {
        let password = match &opts.password {
            Some(password) => password.clone(),
            None => match std::env::var(PASSWORD_ENV) {
                Ok(password) => password,
                Err(_) => dialoguer::Password::new()
                    .with_prompt(format!("Password for {}", opts.username))
                    .interact()
                    .context("Failed to read password")?,
            },
        };

        let session = self
            .gate
            .login(&opts.username, &password)
            .context("Admin login failed")?;

        self.output
            .debug(&format!("Session {} active", session.token));
        Ok(session)
    }
}
