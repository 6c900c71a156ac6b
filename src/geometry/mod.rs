//! Geometry Mapper
//!
//! Converts a [`WellState`] snapshot into canvas-space bands, labels and
//! legend rows. Two affine transforms do all the work:
//!
//! - depth → y: `y = ground_level_y + depth / depth_ft_per_px`
//! - diameter → half width: `diameter * pixels_per_inch / 2`
//!
//! Every band is centred on `well_center_x`. Nothing is validated here:
//! a slurry taller than the well, inverted diameters or out-of-range packer
//! depths come out as inverted, zero-width or off-canvas bands.

mod canvas;
mod legend;
mod shading;

pub use legend::build_legend;
pub use shading::fluid_color;

use crate::config::SchematicConfig;
use crate::types::{
    Band, CementBand, FluidBand, InnerSlurryBand, Label, PackerMarker, SectionBand, WellGeometry,
    WellSection, WellState,
};
use tracing::debug;

/// Map a well snapshot onto the configured canvas.
pub fn map_well(state: &WellState, config: &SchematicConfig) -> WellGeometry {
    let canvas = &config.canvas;
    let total_depth = state.total_depth_ft();

    let geometry = WellGeometry {
        total_depth_ft: total_depth,
        open_hole_diameter_in: state.open_hole_diameter_in,
        open_hole: canvas.centered_band(state.open_hole_diameter_in, 0.0, total_depth),
        sections: map_sections(state, config),
        fluids: map_fluids(state, config),
        cement: map_cement(state, config),
        inner_slurry: map_inner_slurry(state, config),
        packer: map_packer(state, config),
        legend: build_legend(state, &config.palette),
    };

    debug!(
        sections = geometry.sections.len(),
        fluids = geometry.fluids.len(),
        legend_rows = geometry.legend.len(),
        "Mapped well geometry"
    );
    geometry
}

// ============================================================================
// Casing Sections
// ============================================================================

fn map_sections(state: &WellState, config: &SchematicConfig) -> Vec<SectionBand> {
    let canvas = &config.canvas;
    state
        .sections
        .iter()
        .enumerate()
        .filter_map(|(index, section)| {
            let (top, bottom) = state.section_extent(index)?;
            Some(SectionBand {
                index,
                top_ft: top,
                bottom_ft: bottom,
                outer: canvas.centered_band(section.outer_diameter_in(), top, bottom),
                inner: canvas.centered_band(section.internal_diameter_in, top, bottom),
                color: config.palette.section_color(index),
            })
        })
        .collect()
}

// ============================================================================
// Fluid Columns
// ============================================================================

/// One band per fluid whose truncated extent is non-empty.
///
/// Width is the outer diameter of the first section whose shoe lies below
/// the fluid top; zero when no section qualifies.
fn map_fluids(state: &WellState, config: &SchematicConfig) -> Vec<FluidBand> {
    let canvas = &config.canvas;
    let label_x = canvas.well_center_x
        + canvas.half_width(state.open_hole_diameter_in)
        + canvas.label_offset_px;

    state
        .fluids
        .iter()
        .enumerate()
        .filter_map(|(index, fluid)| {
            let (top, bottom) = state.fluid_extent(index)?;
            if bottom <= top || bottom.is_nan() || top.is_nan() {
                debug!(index, top, bottom, "Fluid column hidden");
                return None;
            }
            let diameter = state
                .section_below(top)
                .map_or(0.0, WellSection::outer_diameter_in);
            Some(FluidBand {
                index,
                top_ft: top,
                bottom_ft: bottom,
                band: canvas.centered_band(diameter, top, bottom),
                color: fluid_color(fluid.density),
                label: Label {
                    x: label_x,
                    y: canvas.mid_y(top, bottom),
                    text: format!("{} ({bottom:.0} ft)", fluid.fluid_type),
                },
            })
        })
        .collect()
}

// ============================================================================
// Cement
// ============================================================================

/// Annular cement: two strips between the open-hole wall and the casing
/// that spans the top of cement.
///
/// Formula:
///   top = total_depth - slurry_depth
///   strip width = (OH * ppi - OD * ppi) / 2
///   left x = center - OH * ppi / 2, right x = center + OD * ppi / 2
fn map_cement(state: &WellState, config: &SchematicConfig) -> CementBand {
    let canvas = &config.canvas;
    let total_depth = state.total_depth_ft();
    let top = state.top_of_cement_ft();

    let hole_width = canvas.diameter_to_width(state.open_hole_diameter_in);
    let casing_width = canvas.diameter_to_width(
        state
            .section_below(top)
            .map_or(0.0, WellSection::outer_diameter_in),
    );
    let strip_width = (hole_width - casing_width) / 2.0;
    let y = canvas.depth_to_y(top);
    let height = canvas.scale_depth(total_depth) - canvas.scale_depth(top);

    CementBand {
        top_ft: top,
        bottom_ft: total_depth,
        left: Band::new(canvas.well_center_x - hole_width / 2.0, y, strip_width, height),
        right: Band::new(canvas.well_center_x + casing_width / 2.0, y, strip_width, height),
        color: config.palette.cement,
        label: Label {
            x: canvas.well_center_x + hole_width / 2.0 + canvas.label_offset_px,
            y: canvas.mid_y(top, total_depth),
            text: format!("Cement ({:.0} ft)", state.cement.slurry_depth_ft),
        },
    }
}

/// Cement left inside the last casing, present only for a positive height.
fn map_inner_slurry(state: &WellState, config: &SchematicConfig) -> Option<InnerSlurryBand> {
    let inner = state.cement.inner_slurry_depth_ft;
    if inner <= 0.0 || inner.is_nan() {
        return None;
    }
    let canvas = &config.canvas;
    let last = state.sections.last()?;
    let total_depth = state.total_depth_ft();
    let top = total_depth - inner;

    Some(InnerSlurryBand {
        top_ft: top,
        bottom_ft: total_depth,
        band: canvas.centered_band(last.internal_diameter_in, top, total_depth),
        color: config.palette.cement,
        label: Label {
            x: canvas.well_center_x,
            y: canvas.mid_y(top, total_depth),
            text: format!("Inner Slurry ({inner:.0} ft)"),
        },
    })
}

// ============================================================================
// Packer
// ============================================================================

fn map_packer(state: &WellState, config: &SchematicConfig) -> Option<PackerMarker> {
    let depth = state.packer_depth_ft?;
    let canvas = &config.canvas;
    let width = state.open_hole_diameter_in * canvas.packer_width_per_inch;
    Some(PackerMarker {
        depth_ft: depth,
        band: Band::new(
            canvas.well_center_x - width / 2.0,
            canvas.depth_to_y(depth) - canvas.packer_height_px / 2.0,
            width,
            canvas.packer_height_px,
        ),
        color: config.palette.packer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Fluid, LegendKind};

    fn reference() -> WellGeometry {
        map_well(&WellState::default(), &SchematicConfig::default())
    }

    #[test]
    fn test_reference_sections() {
        let geometry = reference();
        assert_eq!(geometry.total_depth_ft, 2000.0);
        assert_eq!(geometry.sections.len(), 2);

        let first = &geometry.sections[0];
        assert_eq!((first.top_ft, first.bottom_ft), (0.0, 1000.0));
        // OD 6 in -> 48 px wide, ID 5 in -> 40 px
        assert_eq!(first.outer.width, 48.0);
        assert_eq!(first.outer.x, 276.0);
        assert_eq!(first.inner.width, 40.0);
        assert_eq!(first.color.to_string(), "#FF6B6B");

        let second = &geometry.sections[1];
        assert_eq!((second.top_ft, second.bottom_ft), (1000.0, 2000.0));
        assert_eq!(second.color.to_string(), "#4ECDC4");
    }

    #[test]
    fn test_reference_fluids() {
        let geometry = reference();
        assert_eq!(geometry.fluids.len(), 2);

        let water = &geometry.fluids[0];
        assert_eq!((water.top_ft, water.bottom_ft), (0.0, 500.0));
        assert_eq!(water.band.width, 48.0);
        assert_eq!(water.label.text, "Water (500 ft)");
        // center 300 + 32 + 5
        assert_eq!(water.label.x, 337.0);

        let mud = &geometry.fluids[1];
        assert_eq!((mud.top_ft, mud.bottom_ft), (500.0, 1000.0));
        assert_eq!(mud.label.text, "Drilling Mud (1000 ft)");
        assert_eq!(mud.color.to_string(), "#B4B4FF");
    }

    #[test]
    fn test_fluid_below_cement_is_skipped() {
        let mut state = WellState::default();
        state.fluids.push(Fluid::new("Brine", 1800.0, 1.2));
        let geometry = map_well(&state, &SchematicConfig::default());
        // Brine would start at 1500 ft, below the 1000 ft top of cement
        assert_eq!(geometry.fluids.len(), 2);
        assert!(geometry.fluids.iter().all(|f| f.index < 2));
        // Still listed in the legend
        assert!(geometry.legend.iter().any(|e| e.label == "Brine"));
    }

    #[test]
    fn test_fluid_ending_at_its_start_is_skipped() {
        let mut state = WellState::default();
        state.fluids = vec![Fluid::new("Water", 1000.0, 1.0), Fluid::new("Mud", 1500.0, 1.5)];
        let geometry = map_well(&state, &SchematicConfig::default());
        // Mud spans 1000 ft to min(1500, top of cement 1000): empty
        assert_eq!(state.fluid_extent(1), Some((1000.0, 1000.0)));
        assert_eq!(geometry.fluids.len(), 1);
        assert_eq!(geometry.fluids[0].index, 0);
    }

    #[test]
    fn test_fluid_width_zero_without_bounding_section() {
        let mut state = WellState::default();
        state.cement.slurry_depth_ft = -1000.0;
        state.fluids = vec![
            Fluid::new("Water", 2500.0, 1.0),
            Fluid::new("Mud", 2800.0, 1.5),
        ];
        let geometry = map_well(&state, &SchematicConfig::default());
        let mud = geometry.fluids.iter().find(|f| f.index == 1).unwrap();
        assert_eq!(mud.top_ft, 2500.0);
        assert_eq!(mud.band.width, 0.0);
    }

    #[test]
    fn test_cement_strips_fill_annulus() {
        let geometry = reference();
        let cement = &geometry.cement;
        assert_eq!((cement.top_ft, cement.bottom_ft), (1000.0, 2000.0));
        // Hole 64 px; casing below 1000 ft is OD 4.8 in -> 38.4 px
        assert!((cement.left.width - 12.8).abs() < 1e-9);
        assert!((cement.right.width - 12.8).abs() < 1e-9);
        assert_eq!(cement.left.x, 268.0);
        assert!((cement.right.x - 319.2).abs() < 1e-9);
        assert!((cement.left.right() - (300.0 - 19.2)).abs() < 1e-9);
        assert_eq!(cement.label.text, "Cement (1000 ft)");
    }

    #[test]
    fn test_slurry_taller_than_well_inverts_band() {
        let mut state = WellState::default();
        state.cement.slurry_depth_ft = 3000.0;
        let geometry = map_well(&state, &SchematicConfig::default());
        assert_eq!(geometry.cement.top_ft, -1000.0);
        assert!(geometry.cement.left.y < 150.0);
        // Every fluid truncated to -1000 ft: nothing visible
        assert!(geometry.fluids.is_empty());
    }

    #[test]
    fn test_packer_marker() {
        let mut state = WellState::default();
        assert!(map_well(&state, &SchematicConfig::default()).packer.is_none());

        state.packer_depth_ft = Some(1200.0);
        let geometry = map_well(&state, &SchematicConfig::default());
        let packer = geometry.packer.unwrap();
        // 8 in * 10 = 80 px wide, centred at y = 150 + 200
        assert_eq!(packer.band.width, 80.0);
        assert_eq!(packer.band.x, 260.0);
        assert_eq!(packer.band.y, 345.0);
        assert_eq!(packer.band.height, 10.0);
        assert!(geometry.legend.iter().any(|e| e.kind == LegendKind::Packer));
    }

    #[test]
    fn test_inner_slurry_band() {
        let mut state = WellState::default();
        state.cement.inner_slurry_depth_ft = 600.0;
        let geometry = map_well(&state, &SchematicConfig::default());
        let inner = geometry.inner_slurry.unwrap();
        assert_eq!((inner.top_ft, inner.bottom_ft), (1400.0, 2000.0));
        // Last section ID 4 in -> 32 px
        assert_eq!(inner.band.width, 32.0);
        assert_eq!(inner.label.text, "Inner Slurry (600 ft)");
        assert_eq!(inner.label.x, 300.0);
    }

    #[test]
    fn test_no_inner_slurry_by_default() {
        assert!(reference().inner_slurry.is_none());
    }

    #[test]
    fn test_empty_sections_do_not_panic() {
        let state = WellState {
            sections: Vec::new(),
            ..WellState::default()
        };
        let geometry = map_well(&state, &SchematicConfig::default());
        assert_eq!(geometry.total_depth_ft, 0.0);
        assert!(geometry.sections.is_empty());
        assert_eq!(geometry.open_hole.height, 0.0);
    }
}
