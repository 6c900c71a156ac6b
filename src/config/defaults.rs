//! System-wide default constants.
//!
//! Centralises the numbers the editor and mapper share.
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Config Loading
// ============================================================================

/// Environment variable holding the path to a layout config file.
pub const CONFIG_ENV_VAR: &str = "WELL_SCHEMATIC_CONFIG";

/// Layout config file looked up in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "schematic.toml";

/// Maximum edit distance for "did you mean" suggestions on unknown keys.
pub const MAX_SUGGESTION_DISTANCE: usize = 3;

// ============================================================================
// Editor Transitions
// ============================================================================

/// A new section is this much narrower than the one above it (inches).
pub const NEW_SECTION_DIAMETER_STEP_IN: f64 = 0.5;

/// A new section extends this far below the previous shoe (ft).
pub const NEW_SECTION_DEPTH_STEP_FT: f64 = 1000.0;

/// A new fluid extends this far below the previous fluid (ft).
pub const NEW_FLUID_DEPTH_STEP_FT: f64 = 500.0;

/// Label given to a freshly added fluid.
pub const NEW_FLUID_LABEL: &str = "New Fluid";

/// Density given to a freshly added fluid (g/cm³).
pub const NEW_FLUID_DENSITY: f64 = 1.0;

// ============================================================================
// Fluid Colouring
// ============================================================================

/// Red and green intensity lost per g/cm³ of fluid density.
///
/// `intensity = clamp(255 - density * FLUID_DENSITY_SHADE_FACTOR, 0, 255)`
pub const FLUID_DENSITY_SHADE_FACTOR: f64 = 50.0;
