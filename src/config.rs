//! Configuration management for Writerdesk
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::catalog::{SortKey, ViewMode};
use crate::constants::{
    CONFIG_GENERATED, COMPACT_WIDTH_DEFAULT, COMPACT_WIDTH_MAX, COMPACT_WIDTH_MIN, DEFAULT_ISSUES_URL,
    DEFAULT_SOCIAL_URL, PRICE_SLIDER_MAX,
};
use crate::icons::IconTheme;
use crate::menu::Session;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub catalog: CatalogConfig,
    pub session: SessionConfig,
    pub links: LinksConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Terminal width (columns) below which the compact menu bar is shown
    pub compact_width: u16,
    /// Initial result layout
    /// Options: "grid", "list"
    pub default_view: ViewMode,
    /// Options: "Emoji", "Unicode", "Ascii"
    pub icon_theme: IconTheme,
}

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog to load instead of the built-in sample books
    pub file: Option<PathBuf>,
    /// Options: "featured", "price-low", "price-high", "rating", "newest", "bestseller"
    pub default_sort: SortKey,
    /// Upper price bound on startup, in whole dollars
    pub initial_max_price: u16,
}

/// Identity snapshot shown by the menu bar
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    pub authenticated: bool,
    pub handle: Option<String>,
}

/// External links and how to open them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Program used to open URLs (arguments allowed, the URL is appended)
    pub browser_command: String,
    pub social_url: String,
    pub issues_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Options: "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            compact_width: COMPACT_WIDTH_DEFAULT,
            default_view: ViewMode::Grid,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: None,
            default_sort: SortKey::Featured,
            initial_max_price: PRICE_SLIDER_MAX,
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        let browser_command = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        };
        Self {
            browser_command: browser_command.to_string(),
            social_url: DEFAULT_SOCIAL_URL.to_string(),
            issues_url: DEFAULT_ISSUES_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level; invalid values are rejected by [`Config::validate`]
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl SessionConfig {
    #[must_use]
    pub fn to_session(&self) -> Session {
        if self.authenticated {
            Session::signed_in(self.handle.clone())
        } else {
            Session::signed_out()
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("writerdesk.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("writerdesk").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.compact_width < COMPACT_WIDTH_MIN || self.ui.compact_width > COMPACT_WIDTH_MAX {
            anyhow::bail!(
                "compact_width must be between {} and {} columns, got {}",
                COMPACT_WIDTH_MIN,
                COMPACT_WIDTH_MAX,
                self.ui.compact_width
            );
        }

        if self.catalog.initial_max_price > PRICE_SLIDER_MAX {
            anyhow::bail!(
                "initial_max_price cannot exceed {}, got {}",
                PRICE_SLIDER_MAX,
                self.catalog.initial_max_price
            );
        }

        if let Some(file) = &self.catalog.file {
            if file.as_os_str().is_empty() {
                anyhow::bail!("catalog file path cannot be empty");
            }
        }

        if self.session.authenticated {
            if let Some(handle) = &self.session.handle {
                if handle.chars().any(char::is_whitespace) {
                    anyhow::bail!("Invalid session handle '{}': handles cannot contain whitespace", handle);
                }
            }
        }

        if self.links.browser_command.trim().is_empty() {
            anyhow::bail!("browser_command cannot be empty");
        }

        for (name, url) in [("social_url", &self.links.social_url), ("issues_url", &self.links.issues_url)] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                anyhow::bail!("{} must be an http(s) URL, got '{}'", name, url);
            }
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Writerdesk Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("writerdesk"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
