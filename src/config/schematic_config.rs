//! Schematic Configuration - canvas layout and palette as TOML values
//!
//! Every drawing constant lives in this module. Each struct implements
//! `Default` with the stock layout (800×1000 canvas, 8 px per inch of
//! diameter, 6 ft of depth per pixel), so rendering is unchanged when no
//! config file is present.

use super::defaults::{CONFIG_ENV_VAR, LOCAL_CONFIG_FILE};
use crate::types::Rgb;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for schematic rendering.
///
/// Load with `SchematicConfig::load()` which searches:
/// 1. `$WELL_SCHEMATIC_CONFIG` env var
/// 2. `./schematic.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchematicConfig {
    /// Canvas size and depth/diameter transforms
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Legend table placement
    #[serde(default)]
    pub legend: LegendConfig,

    /// Fill colours
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl SchematicConfig {
    /// Load configuration using the standard search order:
    /// 1. `$WELL_SCHEMATIC_CONFIG` environment variable
    /// 2. `./schematic.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded schematic config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        // 2. Check ./schematic.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded schematic config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        // 3. Defaults
        info!("No {} found, using built-in layout", LOCAL_CONFIG_FILE);
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings; range violations are errors.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        // Two-pass: check for unknown keys first (warnings only)
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate layout values.
    ///
    /// Scale factors are used as divisors or multipliers for every band, so
    /// they must be finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_layout_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {1}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {1}", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Canvas
// ============================================================================

/// Canvas size and the affine transforms from well units to pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width (px)
    #[serde(default = "default_width")]
    pub width_px: f64,

    /// Canvas height (px)
    #[serde(default = "default_height")]
    pub height_px: f64,

    /// Pixels per inch of diameter.
    #[serde(default = "default_pixels_per_inch")]
    pub pixels_per_inch: f64,

    /// Feet of depth per pixel. `y = ground_level_y + depth / depth_ft_per_px`.
    #[serde(default = "default_depth_ft_per_px")]
    pub depth_ft_per_px: f64,

    /// x coordinate of the well-bore axis (px)
    #[serde(default = "default_well_center_x")]
    pub well_center_x: f64,

    /// y coordinate of the surface (px)
    #[serde(default = "default_ground_level_y")]
    pub ground_level_y: f64,

    /// Half the derrick base width (px)
    #[serde(default = "default_derrick_half_width")]
    pub derrick_half_width_px: f64,

    /// y coordinate of the derrick crown (px)
    #[serde(default = "default_derrick_top_y")]
    pub derrick_top_y: f64,

    /// Packer marker width per inch of open-hole diameter (px)
    #[serde(default = "default_packer_width_per_inch")]
    pub packer_width_per_inch: f64,

    /// Packer marker height (px)
    #[serde(default = "default_packer_height")]
    pub packer_height_px: f64,

    /// Gap between the open-hole wall and band labels (px)
    #[serde(default = "default_label_offset")]
    pub label_offset_px: f64,
}

fn default_width() -> f64 { 800.0 }
fn default_height() -> f64 { 1000.0 }
fn default_pixels_per_inch() -> f64 { 8.0 }
fn default_depth_ft_per_px() -> f64 { 6.0 }
fn default_well_center_x() -> f64 { 300.0 }
fn default_ground_level_y() -> f64 { 150.0 }
fn default_derrick_half_width() -> f64 { 70.0 }
fn default_derrick_top_y() -> f64 { 20.0 }
fn default_packer_width_per_inch() -> f64 { 10.0 }
fn default_packer_height() -> f64 { 10.0 }
fn default_label_offset() -> f64 { 5.0 }

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width_px: default_width(),
            height_px: default_height(),
            pixels_per_inch: default_pixels_per_inch(),
            depth_ft_per_px: default_depth_ft_per_px(),
            well_center_x: default_well_center_x(),
            ground_level_y: default_ground_level_y(),
            derrick_half_width_px: default_derrick_half_width(),
            derrick_top_y: default_derrick_top_y(),
            packer_width_per_inch: default_packer_width_per_inch(),
            packer_height_px: default_packer_height(),
            label_offset_px: default_label_offset(),
        }
    }
}

// ============================================================================
// Legend
// ============================================================================

/// Legend table placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default = "default_legend_x")]
    pub x: f64,

    /// y of the first row; the title sits 20 px above it
    #[serde(default = "default_legend_y")]
    pub y: f64,

    #[serde(default = "default_row_height")]
    pub row_height_px: f64,

    #[serde(default = "default_swatch_width")]
    pub swatch_width_px: f64,

    /// Width of the name column; details start after it
    #[serde(default = "default_label_width")]
    pub label_width_px: f64,
}

fn default_legend_x() -> f64 { 550.0 }
fn default_legend_y() -> f64 { 150.0 }
fn default_row_height() -> f64 { 25.0 }
fn default_swatch_width() -> f64 { 30.0 }
fn default_label_width() -> f64 { 150.0 }

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            x: default_legend_x(),
            y: default_legend_y(),
            row_height_px: default_row_height(),
            swatch_width_px: default_swatch_width(),
            label_width_px: default_label_width(),
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Fill colours for every element of the schematic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Section colours, cycled by section index
    #[serde(default = "default_section_colors")]
    pub sections: Vec<Rgb>,

    /// Bore fill drawn over each section's outer band
    #[serde(default = "default_background")]
    pub background: Rgb,

    #[serde(default = "default_open_hole")]
    pub open_hole: Rgb,

    #[serde(default = "default_cement")]
    pub cement: Rgb,

    #[serde(default = "default_packer")]
    pub packer: Rgb,

    #[serde(default = "default_sky")]
    pub sky: Rgb,

    #[serde(default = "default_ground")]
    pub ground: Rgb,

    #[serde(default = "default_derrick")]
    pub derrick: Rgb,
}

fn default_section_colors() -> Vec<Rgb> {
    vec![
        Rgb::new(0xFF, 0x6B, 0x6B),
        Rgb::new(0x4E, 0xCD, 0xC4),
        Rgb::new(0x45, 0xB7, 0xD1),
        Rgb::new(0xFF, 0xA0, 0x7A),
        Rgb::new(0x98, 0xD8, 0xC8),
        Rgb::new(0xF0, 0x62, 0x92),
        Rgb::new(0xAE, 0xD5, 0x81),
        Rgb::new(0xFF, 0xD5, 0x4F),
    ]
}
fn default_background() -> Rgb { Rgb::WHITE }
fn default_open_hole() -> Rgb { Rgb::new(0x36, 0x45, 0x4F) }
fn default_cement() -> Rgb { Rgb::new(0x4A, 0x4A, 0x4A) }
fn default_packer() -> Rgb { Rgb::new(0xFF, 0x00, 0x00) }
fn default_sky() -> Rgb { Rgb::new(0x87, 0xCE, 0xEB) }
fn default_ground() -> Rgb { Rgb::new(0x8B, 0x45, 0x13) }
fn default_derrick() -> Rgb { Rgb::new(0x70, 0x80, 0x90) }

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            sections: default_section_colors(),
            background: default_background(),
            open_hole: default_open_hole(),
            cement: default_cement(),
            packer: default_packer(),
            sky: default_sky(),
            ground: default_ground(),
            derrick: default_derrick(),
        }
    }
}

impl PaletteConfig {
    /// Colour for section `index`, cycling through the palette.
    ///
    /// An empty palette falls back to the open-hole colour.
    pub fn section_color(&self, index: usize) -> Rgb {
        if self.sections.is_empty() {
            return self.open_hole;
        }
        self.sections[index % self.sections.len()]
    }
}
