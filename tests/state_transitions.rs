//! State Transition Tests
//!
//! Drives a well through editor-style sequences of actions and checks the
//! snapshot, the mapped geometry and the cement sheet after each step.

use well_schematic::types::{FluidField, SectionField};
use well_schematic::{cement_job_report, map_well, SchematicConfig, WellAction, WellState};

#[test]
fn editing_session_from_reference_well() {
    let config = SchematicConfig::default();
    let state = WellState::default().apply_all([
        WellAction::AddSection,
        WellAction::UpdateSection {
            index: 2,
            field: SectionField::Depth,
            value: 2600.0,
        },
        WellAction::AddFluid,
        WellAction::UpdateFluid {
            index: 2,
            field: FluidField::Type("Spacer".into()),
        },
        WellAction::SetSlurryDepth { depth_ft: 500.0 },
        WellAction::SetPackerDepth { depth_ft: 1800.0 },
    ]);

    assert_eq!(state.total_depth_ft(), 2600.0);
    assert_eq!(state.packer_depth_ft, Some(1800.0));

    let geometry = map_well(&state, &config);
    assert_eq!(geometry.sections.len(), 3);
    // Spacer: 1500 ft down to min(2000, 2600 - 500)
    let spacer = geometry.fluids.iter().find(|f| f.index == 2).unwrap();
    assert_eq!((spacer.top_ft, spacer.bottom_ft), (1500.0, 2000.0));
    assert_eq!(spacer.label.text, "Spacer (2000 ft)");
    assert_eq!(geometry.cement.top_ft, 2100.0);
}

#[test]
fn packer_slider_tracks_total_depth() {
    // Clamp uses the total depth at the time of the action
    let state = WellState::default().apply_all([
        WellAction::SetPackerDepth { depth_ft: 2500.0 },
        WellAction::AddSection,
    ]);
    assert_eq!(state.packer_depth_ft, Some(2000.0));

    let state = state.apply(WellAction::SetPackerDepth { depth_ft: 2500.0 });
    assert_eq!(state.packer_depth_ft, Some(2500.0));
}

#[test]
fn removal_keeps_at_least_one_entry() {
    let mut state = WellState::default();
    for _ in 0..5 {
        state = state.apply_all([
            WellAction::RemoveSection { index: 0 },
            WellAction::RemoveFluid { index: 0 },
        ]);
        assert!(!state.sections.is_empty());
        assert!(!state.fluids.is_empty());
    }
    assert_eq!(state.sections.len(), 1);
    assert_eq!(state.fluids.len(), 1);
    // The surviving entries are the deepest ones
    assert_eq!(state.sections[0].depth_ft, 2000.0);
    assert_eq!(state.fluids[0].fluid_type, "Drilling Mud");
}

#[test]
fn out_of_range_removal_is_noop() {
    let before = WellState::default();
    let after = before
        .clone()
        .apply_all([
            WellAction::RemoveSection { index: 7 },
            WellAction::RemoveFluid { index: 7 },
            WellAction::UpdateFluid {
                index: 7,
                field: FluidField::Depth(1.0),
            },
        ]);
    assert_eq!(before, after);
}

#[test]
fn open_hole_change_updates_cement_sheet() {
    let before = cement_job_report(&WellState::default());
    let state = WellState::default().apply(WellAction::SetOpenHoleDiameter { diameter_in: 8.5 });
    let after = cement_job_report(&state);
    assert!(after.volumes.annular_volume_ft3 > before.volumes.annular_volume_ft3);
}

#[test]
fn actions_load_from_json() {
    let json = r#"[
        {"action": "add_section"},
        {"action": "update_section", "index": 0, "field": "wall_thickness", "value": 0.55},
        {"action": "update_fluid", "index": 1, "field": {"density": 1.3}},
        {"action": "set_slurry_yield", "yield_ft3_per_sack": 1.18},
        {"action": "remove_packer"}
    ]"#;
    let actions: Vec<WellAction> = serde_json::from_str(json).unwrap();
    let state = WellState::default().apply_all(actions);
    assert_eq!(state.sections.len(), 3);
    assert_eq!(state.sections[0].wall_thickness_in, 0.55);
    assert_eq!(state.fluids[1].density, 1.3);
    assert_eq!(state.cement.slurry_yield, 1.18);
}
