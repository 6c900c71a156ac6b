//! Shared data structures for well schematics and cement job calculations
//!
//! - Well description: `WellSection`, `Fluid`, `CementSlurryJob`, `WellState`
//! - Mapped geometry: `Band`, `SectionBand`, `FluidBand`, `CementBand`,
//!   `PackerMarker`, `LegendEntry`, `WellGeometry`
//! - Cement job results: `CementVolumes`, `CementJobReport`

mod cement;
mod color;
mod geometry;
mod well;

pub use cement::*;
pub use color::*;
pub use geometry::*;
pub use well::*;
