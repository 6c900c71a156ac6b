//! Well Schematic: casing, fluid and cement schematics with cement job volumes
//!
//! Takes a well description (casing sections, annular fluids, a cement
//! slurry job and an optional packer) and produces a cross-section schematic
//! plus the slurry volumes and weight for the job.
//!
//! ## Architecture
//!
//! - **Types**: well description, mapped geometry and cement report records
//! - **State**: pure edit transitions over a well snapshot
//! - **Geometry Mapper**: well units to canvas bands, labels and legend
//! - **Physics Engine**: annular volume, slurry volume and weight
//! - **Render**: vector scene and SVG output
//! - **Config**: layout/palette file, well files, validation

pub mod config;
pub mod geometry;
pub mod physics_engine;
pub mod render;
pub mod state;
pub mod types;

// Re-export configuration
pub use config::{SchematicConfig, Strictness, WellFileError};

// Re-export commonly used types
pub use types::{
    CementJobReport, CementSlurryJob, CementVolumes, Fluid, FluidField, SectionField,
    WellGeometry, WellSection, WellState,
};

// Re-export the core operations
pub use geometry::map_well;
pub use physics_engine::{calculate_cement_volumes, cement_job_report};
pub use render::{render_svg, Scene};
pub use state::WellAction;
