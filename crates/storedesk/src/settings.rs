//! Application settings that persist across sessions.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use storedesk_core::StatusFilter;

/// Default public marketplace URL used to build storefront links.
pub const DEFAULT_MARKETPLACE_URL: &str = "https://market.storedesk.app";

/// Environment variables that override the settings file.
const ENV_API_URL: &str = "STOREDESK_API_URL";
const ENV_API_KEY: &str = "STOREDESK_API_KEY";
const ENV_USER_ID: &str = "STOREDESK_USER_ID";

/// Keys accepted by `settings set`.
pub const KEYS: [&str; 6] = [
    "api_url",
    "api_key",
    "user_id",
    "marketplace_url",
    "desktop_notifications",
    "default_status_filter",
];

/// Persistent settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend project URL.
    pub api_url: String,
    /// Publishable backend API key.
    pub api_key: String,
    /// Signed-in user.
    pub user_id: String,
    /// Public marketplace URL for storefront links.
    pub marketplace_url: String,
    /// Also raise desktop notifications.
    pub desktop_notifications: bool,
    /// Status filter used when `inquiries list` gets none.
    pub default_status_filter: StatusFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: String::new(),
            user_id: String::new(),
            marketplace_url: DEFAULT_MARKETPLACE_URL.to_string(),
            desktop_notifications: false,
            default_status_filter: StatusFilter::All,
        }
    }
}

impl Settings {
    /// Location of the settings file.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("storedesk")
            .join("settings.json")
    }

    /// Load settings from a file, falling back to defaults if it is missing.
    pub async fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;

        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Load settings and apply environment overrides.
    pub async fn load() -> anyhow::Result<Self> {
        let mut settings = Self::load_from(&Self::path()).await?;
        settings.apply_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Save settings to a file, creating its directory.
    pub async fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("creating {}", dir.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents)
            .await
            .with_context(|| format!("writing {}", path.display()))?;

        tracing::info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Apply overrides from a variable lookup. Blank values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key| lookup(key).filter(|v: &String| !v.trim().is_empty());
        if let Some(url) = get(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = key;
        }
        if let Some(user) = get(ENV_USER_ID) {
            self.user_id = user;
        }
    }

    /// Set one key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "api_url" => self.api_url = value.trim().to_string(),
            "api_key" => self.api_key = value.trim().to_string(),
            "user_id" => self.user_id = value.trim().to_string(),
            "marketplace_url" => self.marketplace_url = value.trim().to_string(),
            "desktop_notifications" => {
                self.desktop_notifications = value
                    .trim()
                    .parse()
                    .with_context(|| format!("'{value}' is not true or false"))?;
            }
            "default_status_filter" => self.default_status_filter = value.parse()?,
            _ => bail!("unknown setting '{key}' (expected one of: {})", KEYS.join(", ")),
        }
        Ok(())
    }

    /// Settings as pretty JSON with the API key masked.
    pub fn redacted(&self) -> anyhow::Result<String> {
        let mut shown = self.clone();
        if !shown.api_key.is_empty() {
            let tail: String = shown
                .api_key
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            shown.api_key = format!("****{tail}");
        }
        Ok(serde_json::to_string_pretty(&shown)?)
    }
}
