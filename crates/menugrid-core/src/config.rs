//! Template configuration schema.
//!
//! Configuration documents arrive as JSON from the configuration store and
//! are deserialized through [`TemplateConfig`], an explicitly tagged enum,
//! rather than trusting ambient JSON shape. Unknown template kinds fail at
//! the boundary instead of being guessed at downstream.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::MenuSlide;

/// Hard lower bound on any configured or computed font size, in pixels.
pub const GLOBAL_FONT_MIN: u32 = 12;

/// Hard upper bound on any configured or computed font size, in pixels.
///
/// Headers taller than this stop fitting a menu row on a 1080p panel, so
/// the bound holds even when the slide configuration is malformed.
pub const GLOBAL_FONT_MAX: u32 = 48;

/// Font sizing behavior for a menu board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontScalingConfig {
    /// Scale the font from content volume; when false a manual size is used.
    pub auto_scale: bool,
    /// Fixed size used when `auto_scale` is off; clamped to the bounds below.
    pub manual_font_size: Option<u32>,
    /// Smallest size auto-scaling may produce, in pixels.
    pub min_font_size: u32,
    /// Largest size auto-scaling may produce, in pixels.
    pub max_font_size: u32,
}

impl Default for FontScalingConfig {
    fn default() -> Self {
        Self {
            auto_scale: true,
            manual_font_size: None,
            min_font_size: 16,
            max_font_size: 36,
        }
    }
}

/// Administrator-specified fixed adjustment to the auto-computed column
/// count. When enabled it always wins over the auto-optimizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualOverride {
    pub enabled: bool,
    /// Signed number of columns added to the auto-computed count.
    pub adjustment: i32,
}

/// Independent, summable column-count nudges applied after planning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoOptimizations {
    /// Drop a column when the last one would be nearly empty.
    pub prevent_empty_columns: bool,
    /// Add a column when per-column density exceeds `density_threshold`.
    pub prevent_overflow: bool,
    /// Nudge toward columns near their reference width on this screen.
    pub optimize_for_full_width: bool,
    /// Fraction of the ideal items-per-column at which overflow prevention
    /// fires.
    pub density_threshold: f64,
}

impl Default for AutoOptimizations {
    fn default() -> Self {
        Self {
            prevent_empty_columns: false,
            prevent_overflow: false,
            optimize_for_full_width: false,
            density_threshold: 0.85,
        }
    }
}

/// Column behavior for a menu board.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnControlConfig {
    pub manual_override: ManualOverride,
    pub auto_optimizations: AutoOptimizations,
}

/// Full configuration of a menu-board template: its slides plus the font
/// and column behavior shared by all of them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuTemplateConfig {
    pub slides: Vec<MenuSlide>,
    pub font_scaling: FontScalingConfig,
    pub column_control: ColumnControlConfig,
}

/// A template configuration document, tagged by template kind.
///
/// Only the menu-board template exists today; the tag is the extension
/// point for further template kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TemplateConfig {
    MenuBoard(MenuTemplateConfig),
}

impl TemplateConfig {
    /// Parse a configuration document from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration back to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
