// ⚙️ Configuration
// Explicit settings passed into every entry point; no module-level globals.
//
// Precedence: defaults < JSON file < MENU_SHEET_URL < command-line flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::navigation::{DEFAULT_HEADER_OFFSET, DEFAULT_SPY_THRESHOLD};

/// Environment variable that overrides the sheet address
pub const SOURCE_URL_ENV: &str = "MENU_SHEET_URL";

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "menu-sheet.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Published CSV export of the menu sheet (None = not connected yet)
    pub source_url: Option<String>,

    /// Scroll-spy threshold in pixels
    pub spy_threshold: f64,

    /// Fixed header height subtracted from click-to-scroll targets
    pub header_offset: f64,

    /// HTTP request timeout
    pub timeout_seconds: u64,

    /// Listen address for the web server
    pub bind_addr: String,

    /// Page title
    pub title: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            source_url: None,
            spy_threshold: DEFAULT_SPY_THRESHOLD,
            header_offset: DEFAULT_HEADER_OFFSET,
            timeout_seconds: 30,
            bind_addr: "0.0.0.0:3000".into(),
            title: "Carta".into(),
        }
    }
}

impl MenuConfig {
    /// Load from a JSON file if it exists, otherwise defaults.
    /// The environment override is applied afterwards in both cases.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        Ok(config.with_source_override(std::env::var(SOURCE_URL_ENV).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: MenuConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Replace the source address when an override is given and non-blank
    pub fn with_source_override(mut self, source: Option<String>) -> Self {
        if let Some(source) = source.filter(|s| !s.trim().is_empty()) {
            self.source_url = Some(source);
        }
        self
    }
}
