//! Well description types: casing sections, annular fluids, cement job

use serde::{Deserialize, Serialize};

// ============================================================================
// Casing Sections
// ============================================================================

/// A casing/pipe interval.
///
/// `depth_ft` is the *bottom* of the section; the top is the previous
/// section's bottom (or surface for the first section).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellSection {
    /// Internal diameter (inches)
    pub internal_diameter_in: f64,
    /// Wall thickness (inches)
    pub wall_thickness_in: f64,
    /// Bottom depth from surface (ft)
    pub depth_ft: f64,
}

impl WellSection {
    pub const fn new(internal_diameter_in: f64, wall_thickness_in: f64, depth_ft: f64) -> Self {
        Self {
            internal_diameter_in,
            wall_thickness_in,
            depth_ft,
        }
    }

    /// Outer diameter: internal diameter plus both walls (inches).
    pub fn outer_diameter_in(&self) -> f64 {
        self.internal_diameter_in + 2.0 * self.wall_thickness_in
    }
}

/// Editable field of a [`WellSection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionField {
    InternalDiameter,
    WallThickness,
    Depth,
}

// ============================================================================
// Annular Fluids
// ============================================================================

/// A fluid column. `depth_ft` marks the bottom of the column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fluid {
    /// Display label, e.g. "Water" or "Drilling Mud"
    #[serde(rename = "type")]
    pub fluid_type: String,
    /// Bottom of this fluid's column (ft)
    pub depth_ft: f64,
    /// Density (g/cm³)
    pub density: f64,
}

impl Fluid {
    pub fn new(fluid_type: impl Into<String>, depth_ft: f64, density: f64) -> Self {
        Self {
            fluid_type: fluid_type.into(),
            depth_ft,
            density,
        }
    }
}

/// Editable field of a [`Fluid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidField {
    Type(String),
    Depth(f64),
    Density(f64),
}

// ============================================================================
// Cement Slurry Job
// ============================================================================

/// Cement slurry parameters entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CementSlurryJob {
    /// Height of the slurry column measured up from total depth (ft)
    pub slurry_depth_ft: f64,
    /// Informational start depth, ft from bottom
    pub slurry_start_depth_ft: f64,
    /// Slurry density (ppg)
    pub slurry_density_ppg: f64,
    /// Slurry yield (ft³/sack)
    pub slurry_yield: f64,
    /// Height of cement left inside the last casing (ft). Zero disables it.
    #[serde(default)]
    pub inner_slurry_depth_ft: f64,
}

impl Default for CementSlurryJob {
    fn default() -> Self {
        Self {
            slurry_depth_ft: 1000.0,
            slurry_start_depth_ft: 2000.0,
            slurry_density_ppg: 15.8,
            slurry_yield: 1.15,
            inner_slurry_depth_ft: 0.0,
        }
    }
}

// ============================================================================
// Well State (complete snapshot)
// ============================================================================

/// Complete well description handed to the mapper and calculator.
///
/// This is an immutable snapshot: edits go through [`WellState::apply`]
/// (see `crate::state`) which returns a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellState {
    /// Open (uncased) hole diameter (inches)
    pub open_hole_diameter_in: f64,

    /// Packer depth (ft). `None` = no packer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packer_depth_ft: Option<f64>,

    /// Casing sections ordered from surface down
    #[serde(rename = "section")]
    pub sections: Vec<WellSection>,

    /// Fluid columns ordered from surface down
    #[serde(default, rename = "fluid")]
    pub fluids: Vec<Fluid>,

    #[serde(default)]
    pub cement: CementSlurryJob,
}

impl Default for WellState {
    fn default() -> Self {
        Self {
            open_hole_diameter_in: 8.0,
            packer_depth_ft: None,
            sections: vec![
                WellSection::new(5.0, 0.5, 1000.0),
                WellSection::new(4.0, 0.4, 2000.0),
            ],
            fluids: vec![
                Fluid::new("Water", 500.0, 1.0),
                Fluid::new("Drilling Mud", 1500.0, 1.5),
            ],
            cement: CementSlurryJob::default(),
        }
    }
}

impl WellState {
    /// Depth of the well: bottom of the last section (0 for an empty list).
    pub fn total_depth_ft(&self) -> f64 {
        self.sections.last().map_or(0.0, |s| s.depth_ft)
    }

    /// Outer diameter of the deepest casing section (inches).
    pub fn casing_outer_diameter_in(&self) -> f64 {
        self.sections
            .last()
            .map_or(0.0, WellSection::outer_diameter_in)
    }

    /// Top of the annular cement column (ft).
    pub fn top_of_cement_ft(&self) -> f64 {
        self.total_depth_ft() - self.cement.slurry_depth_ft
    }

    /// First section whose bottom lies strictly below `depth_ft`.
    ///
    /// Used to pick the casing that bounds a fluid or cement column.
    pub fn section_below(&self, depth_ft: f64) -> Option<&WellSection> {
        self.sections.iter().find(|s| s.depth_ft > depth_ft)
    }

    /// Top and bottom depth of section `index`.
    pub fn section_extent(&self, index: usize) -> Option<(f64, f64)> {
        let section = self.sections.get(index)?;
        let top = if index == 0 {
            0.0
        } else {
            self.sections[index - 1].depth_ft
        };
        Some((top, section.depth_ft))
    }

    /// Top and (truncated) bottom depth of fluid `index`.
    ///
    /// The bottom is capped at the top of cement, and at the top of the
    /// inner slurry when one is set. The result may be inverted; callers
    /// decide whether to draw it.
    pub fn fluid_extent(&self, index: usize) -> Option<(f64, f64)> {
        let fluid = self.fluids.get(index)?;
        let top = if index == 0 {
            0.0
        } else {
            self.fluids[index - 1].depth_ft
        };
        let total_depth = self.total_depth_ft();
        let mut bottom = fluid.depth_ft.min(total_depth - self.cement.slurry_depth_ft);
        if self.cement.inner_slurry_depth_ft > 0.0 {
            bottom = bottom.min(total_depth - self.cement.inner_slurry_depth_ft);
        }
        Some((top, bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_diameter() {
        let section = WellSection::new(4.0, 0.4, 2000.0);
        assert!((section.outer_diameter_in() - 4.8).abs() < 1e-12);
    }

    #[test]
    fn test_default_state_matches_reference_well() {
        let state = WellState::default();
        assert_eq!(state.total_depth_ft(), 2000.0);
        assert!((state.casing_outer_diameter_in() - 4.8).abs() < 1e-12);
        assert_eq!(state.top_of_cement_ft(), 1000.0);
        assert!(state.packer_depth_ft.is_none());
    }

    #[test]
    fn test_section_below_is_strict() {
        let state = WellState::default();
        // Exactly on the first shoe: the first section does not match
        let s = state.section_below(1000.0).map(|s| s.depth_ft);
        assert_eq!(s, Some(2000.0));
        assert!(state.section_below(2000.0).is_none());
    }

    #[test]
    fn test_fluid_extent_truncated_at_cement() {
        let state = WellState::default();
        assert_eq!(state.fluid_extent(0), Some((0.0, 500.0)));
        // Drilling mud down to 1500 ft but cement tops at 1000 ft
        assert_eq!(state.fluid_extent(1), Some((500.0, 1000.0)));
        assert_eq!(state.fluid_extent(2), None);
    }

    #[test]
    fn test_fluid_extent_inner_slurry_cap() {
        let mut state = WellState::default();
        state.cement.slurry_depth_ft = 100.0;
        state.cement.inner_slurry_depth_ft = 800.0;
        // total 2000 - inner 800 = 1200 caps the 1500 ft mud column
        assert_eq!(state.fluid_extent(1), Some((500.0, 1200.0)));
    }

    #[test]
    fn test_empty_sections_total_depth_zero() {
        let state = WellState {
            sections: Vec::new(),
            ..WellState::default()
        };
        assert_eq!(state.total_depth_ft(), 0.0);
        assert_eq!(state.casing_outer_diameter_in(), 0.0);
    }
}
