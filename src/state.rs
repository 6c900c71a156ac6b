//! Well editing transitions
//!
//! Every edit the editor can make is a [`WellAction`]; [`WellState::apply`]
//! takes a snapshot and returns the next one. Transitions are pure: no I/O,
//! no shared state, and an action that does not apply (index out of range,
//! removing the last section) returns the snapshot unchanged.

use crate::config::defaults::{
    NEW_FLUID_DENSITY, NEW_FLUID_DEPTH_STEP_FT, NEW_FLUID_LABEL, NEW_SECTION_DEPTH_STEP_FT,
    NEW_SECTION_DIAMETER_STEP_IN,
};
use crate::types::{Fluid, FluidField, SectionField, WellSection, WellState};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One edit to a well snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WellAction {
    /// Append a section one step narrower and deeper than the last.
    AddSection,
    UpdateSection {
        index: usize,
        field: SectionField,
        value: f64,
    },
    /// Remove a section unless it is the only one.
    RemoveSection { index: usize },

    /// Append "New Fluid" 500 ft below the last fluid.
    AddFluid,
    UpdateFluid { index: usize, field: FluidField },
    /// Remove a fluid unless it is the only one.
    RemoveFluid { index: usize },

    /// Set the packer; the depth is clamped to `[0, total_depth]`.
    SetPackerDepth { depth_ft: f64 },
    RemovePacker,

    SetOpenHoleDiameter { diameter_in: f64 },
    SetSlurryDepth { depth_ft: f64 },
    SetSlurryStartDepth { depth_ft: f64 },
    SetSlurryDensity { density_ppg: f64 },
    SetSlurryYield { yield_ft3_per_sack: f64 },
    SetInnerSlurryDepth { depth_ft: f64 },
}

impl WellState {
    /// Apply one edit and return the resulting snapshot.
    #[must_use]
    pub fn apply(mut self, action: WellAction) -> Self {
        match action {
            WellAction::AddSection => match self.sections.last() {
                Some(last) => {
                    let next = WellSection::new(
                        last.internal_diameter_in - NEW_SECTION_DIAMETER_STEP_IN,
                        last.wall_thickness_in,
                        last.depth_ft + NEW_SECTION_DEPTH_STEP_FT,
                    );
                    self.sections.push(next);
                }
                None => debug!("AddSection ignored: no section to extend"),
            },
            WellAction::UpdateSection {
                index,
                field,
                value,
            } => match self.sections.get_mut(index) {
                Some(section) => match field {
                    SectionField::InternalDiameter => section.internal_diameter_in = value,
                    SectionField::WallThickness => section.wall_thickness_in = value,
                    SectionField::Depth => section.depth_ft = value,
                },
                None => debug!(index, "UpdateSection ignored: no such section"),
            },
            WellAction::RemoveSection { index } => {
                if self.sections.len() > 1 && index < self.sections.len() {
                    self.sections.remove(index);
                } else {
                    debug!(
                        index,
                        len = self.sections.len(),
                        "RemoveSection ignored"
                    );
                }
            }

            WellAction::AddFluid => {
                let depth_ft = self
                    .fluids
                    .last()
                    .map_or(NEW_FLUID_DEPTH_STEP_FT, |f| {
                        f.depth_ft + NEW_FLUID_DEPTH_STEP_FT
                    });
                self.fluids
                    .push(Fluid::new(NEW_FLUID_LABEL, depth_ft, NEW_FLUID_DENSITY));
            }
            WellAction::UpdateFluid { index, field } => match self.fluids.get_mut(index) {
                Some(fluid) => match field {
                    FluidField::Type(label) => fluid.fluid_type = label,
                    FluidField::Depth(depth) => fluid.depth_ft = depth,
                    FluidField::Density(density) => fluid.density = density,
                },
                None => debug!(index, "UpdateFluid ignored: no such fluid"),
            },
            WellAction::RemoveFluid { index } => {
                if self.fluids.len() > 1 && index < self.fluids.len() {
                    self.fluids.remove(index);
                } else {
                    debug!(index, len = self.fluids.len(), "RemoveFluid ignored");
                }
            }

            WellAction::SetPackerDepth { depth_ft } => {
                // max/min rather than clamp: total depth may be negative
                let clamped = depth_ft.max(0.0).min(self.total_depth_ft());
                self.packer_depth_ft = Some(clamped);
            }
            WellAction::RemovePacker => self.packer_depth_ft = None,

            WellAction::SetOpenHoleDiameter { diameter_in } => {
                self.open_hole_diameter_in = diameter_in;
            }
            WellAction::SetSlurryDepth { depth_ft } => self.cement.slurry_depth_ft = depth_ft,
            WellAction::SetSlurryStartDepth { depth_ft } => {
                self.cement.slurry_start_depth_ft = depth_ft;
            }
            WellAction::SetSlurryDensity { density_ppg } => {
                self.cement.slurry_density_ppg = density_ppg;
            }
            WellAction::SetSlurryYield { yield_ft3_per_sack } => {
                self.cement.slurry_yield = yield_ft3_per_sack;
            }
            WellAction::SetInnerSlurryDepth { depth_ft } => {
                self.cement.inner_slurry_depth_ft = depth_ft;
            }
        }
        self
    }

    /// Apply a sequence of edits in order.
    #[must_use]
    pub fn apply_all(self, actions: impl IntoIterator<Item = WellAction>) -> Self {
        actions.into_iter().fold(self, Self::apply)
    }
}
