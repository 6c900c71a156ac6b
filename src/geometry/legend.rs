//! Legend rows for the schematic

use super::shading::fluid_color;
use crate::config::PaletteConfig;
use crate::types::{LegendEntry, LegendKind, WellState};

/// Build the legend: open hole, one row per section, one row per fluid,
/// cement, then inner slurry and packer when present.
///
/// Fluids are listed even when their column is hidden behind the cement.
pub fn build_legend(state: &WellState, palette: &PaletteConfig) -> Vec<LegendEntry> {
    let total_depth = state.total_depth_ft();
    let mut legend = Vec::with_capacity(state.sections.len() + state.fluids.len() + 4);

    legend.push(LegendEntry {
        kind: LegendKind::OpenHole,
        color: palette.open_hole,
        label: "Open Hole".to_string(),
        details: None,
    });

    legend.extend((0..state.sections.len()).map(|i| LegendEntry {
        kind: LegendKind::Section,
        color: palette.section_color(i),
        label: format!("Section {}", i + 1),
        details: None,
    }));

    legend.extend(state.fluids.iter().enumerate().map(|(i, fluid)| {
        let bottom = state.fluid_extent(i).map_or(fluid.depth_ft, |(_, b)| b);
        LegendEntry {
            kind: LegendKind::Fluid,
            color: fluid_color(fluid.density),
            label: fluid.fluid_type.clone(),
            details: Some(format!(
                "Depth: {bottom:.0} ft, Density: {:.2}",
                fluid.density
            )),
        }
    }));

    legend.push(LegendEntry {
        kind: LegendKind::Cement,
        color: palette.cement,
        label: "Cement".to_string(),
        details: Some(format!(
            "Depth: {:.0}-{total_depth:.0} ft",
            state.top_of_cement_ft()
        )),
    });

    let inner = state.cement.inner_slurry_depth_ft;
    if inner > 0.0 {
        legend.push(LegendEntry {
            kind: LegendKind::InnerSlurry,
            color: palette.cement,
            label: "Inner Slurry".to_string(),
            details: Some(format!(
                "Depth: {:.0}-{total_depth:.0} ft",
                total_depth - inner
            )),
        });
    }

    if let Some(depth) = state.packer_depth_ft {
        legend.push(LegendEntry {
            kind: LegendKind::Packer,
            color: palette.packer,
            label: "Packer".to_string(),
            details: Some(format!("Depth: {depth:.0} ft")),
        });
    }

    legend
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_legend() {
        let legend = build_legend(&WellState::default(), &PaletteConfig::default());
        let labels: Vec<&str> = legend.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Open Hole", "Section 1", "Section 2", "Water", "Drilling Mud", "Cement"]
        );
        assert_eq!(
            legend[4].details.as_deref(),
            Some("Depth: 1000 ft, Density: 1.50")
        );
        assert_eq!(legend[5].details.as_deref(), Some("Depth: 1000-2000 ft"));
    }

    #[test]
    fn test_packer_row_only_when_set() {
        let palette = PaletteConfig::default();
        let mut state = WellState::default();
        assert!(!build_legend(&state, &palette)
            .iter()
            .any(|e| e.kind == LegendKind::Packer));

        state.packer_depth_ft = Some(1250.0);
        let legend = build_legend(&state, &palette);
        let packer = legend.iter().find(|e| e.kind == LegendKind::Packer).unwrap();
        assert_eq!(packer.details.as_deref(), Some("Depth: 1250 ft"));
        assert_eq!(packer.color, palette.packer);
    }

    #[test]
    fn test_inner_slurry_row() {
        let mut state = WellState::default();
        state.cement.inner_slurry_depth_ft = 300.0;
        let legend = build_legend(&state, &PaletteConfig::default());
        let inner = legend
            .iter()
            .find(|e| e.kind == LegendKind::InnerSlurry)
            .unwrap();
        assert_eq!(inner.details.as_deref(), Some("Depth: 1700-2000 ft"));
    }
}
