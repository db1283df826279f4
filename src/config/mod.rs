//! Configuration file support.
//!
//! Loads and validates user settings from `~/.config/overmark/config.toml`:
//! tool menu layout, brush defaults, and overlay behavior. If no config file
//! exists, sensible defaults are used automatically.

pub mod types;

pub use types::{BrushConfig, MenuConfig, OverlayConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in
/// the config file.
///
/// # Example TOML
/// ```toml
/// [menu]
/// buttons = ["close", "pen1", "pen2", "rect", "clear"]
/// palette = ["#000000", "#D9333F"]
///
/// [brush]
/// pen_widths = [1.0, 5.0, 10.0, 30.0]
/// eraser_width = 20.0
/// alpha = 0.5
///
/// [overlay]
/// hide_menu_while_drawing = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Tool menu layout (button order, palette colors)
    #[serde(default)]
    pub menu: MenuConfig,

    /// Brush defaults (pen widths, eraser width, alpha toggle value)
    #[serde(default)]
    pub brush: BrushConfig,

    /// Overlay behavior
    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped or dropped and a warning is logged; loading
    /// never fails over out-of-range values.
    fn validate_and_clamp(&mut self) {
        for width in self.brush.pen_widths.iter_mut() {
            if !(1.0..=64.0).contains(width) {
                log::warn!("Invalid pen width {width:.1}, clamping to 1.0-64.0 range");
                *width = width.clamp(1.0, 64.0);
            }
        }

        if !(1.0..=64.0).contains(&self.brush.eraser_width) {
            log::warn!(
                "Invalid eraser_width {:.1}, clamping to 1.0-64.0 range",
                self.brush.eraser_width
            );
            self.brush.eraser_width = self.brush.eraser_width.clamp(1.0, 64.0);
        }

        if !(0.05..=1.0).contains(&self.brush.alpha) {
            log::warn!(
                "Invalid alpha {:.2}, clamping to 0.05-1.0 range",
                self.brush.alpha
            );
            self.brush.alpha = self.brush.alpha.clamp(0.05, 1.0);
        }

        self.menu.buttons.retain(|id| {
            let known = crate::menu::button_from_id(id, &self.brush).is_some();
            if !known {
                log::warn!("Dropping unknown button id {id:?} from menu.buttons");
            }
            known
        });

        self.menu.palette.retain(|entry| {
            let parseable = crate::draw::Color::parse(entry).is_ok();
            if !parseable {
                log::warn!("Dropping unparseable palette entry {entry:?}");
            }
            parseable
        });
    }

    /// Returns the path to the configuration file,
    /// `~/.config/overmark/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("overmark");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// no file exists.
    ///
    /// # Errors
    /// Returns an error if the config directory path cannot be determined, or
    /// if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {config:?}");

        Ok(config)
    }
}
