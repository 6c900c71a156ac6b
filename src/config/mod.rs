//! Configuration Module
//!
//! Two kinds of input file, both TOML:
//!
//! - **Layout config** (`SchematicConfig`): canvas size, scale factors, legend
//!   placement and palette. Optional; every key has a built-in default.
//! - **Well file** (`WellState`): casing sections, fluids, cement job and
//!   packer. This is the data being drawn.
//!
//! ## Layout Loading Order
//!
//! 1. `WELL_SCHEMATIC_CONFIG` environment variable (path to TOML file)
//! 2. `schematic.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ```ignore
//! let config = SchematicConfig::load();
//! let well = WellState::load_from_file(Path::new("well.toml"), Strictness::Lenient)?;
//! let geometry = geometry::map_well(&well, &config);
//! ```

mod schematic_config;
mod well_file;
pub mod defaults;
pub mod validation;

pub use schematic_config::*;
pub use well_file::{Strictness, WellFileError};
