//! Cement Calculator Tests
//!
//! Worked reference job plus the algebraic identities that hold for any
//! positive input.

use well_schematic::physics_engine::{
    calculate_annular_volume, calculate_cement_volume, calculate_cement_weight,
};
use well_schematic::{calculate_cement_volumes, cement_job_report, WellState};

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[test]
fn reference_job_matches_worked_example() {
    let volumes = calculate_cement_volumes(1000.0, 8.0, 4.8, 1.15, 15.8);
    assert_eq!(round1(volumes.annular_volume_ft3), 223.4);
    assert_eq!(round1(volumes.cement_volume), 194.3);
    assert_eq!(round1(volumes.cement_weight_lbs), 3069.4);

    let report = cement_job_report(&WellState::default());
    assert_eq!(report.volumes, volumes);
}

#[test]
fn identities_hold_over_a_grid() {
    for depth in [10.0, 250.0, 1000.0, 7500.0] {
        for (oh, od) in [(8.0, 4.8), (12.25, 9.625), (17.5, 13.375), (6.0, 2.875)] {
            for yield_ in [0.9, 1.15, 1.5] {
                for density in [11.0, 15.8, 18.5] {
                    let v = calculate_cement_volumes(depth, oh, od, yield_, density);
                    assert!((v.cement_volume - v.annular_volume_ft3 / yield_).abs() < 1e-9);
                    assert!((v.cement_weight_lbs - v.cement_volume * density).abs() < 1e-9);
                }
            }
        }
    }
}

#[test]
fn annular_volume_monotonicity() {
    let base = calculate_annular_volume(1000.0, 8.0, 4.8);
    assert!(calculate_annular_volume(1200.0, 8.0, 4.8) > base);
    assert!(calculate_annular_volume(1000.0, 8.5, 4.8) > base);
    assert!(calculate_annular_volume(1000.0, 8.0, 5.5) < base);
}

#[test]
fn degenerate_inputs_degrade_silently() {
    // Casing wider than the hole: negative volume, no error
    assert!(calculate_annular_volume(1000.0, 4.0, 4.8) < 0.0);
    // Zero yield blows up rather than failing
    assert!(calculate_cement_volume(223.4, 0.0).is_infinite());
    assert!(calculate_cement_weight(f64::NAN, 15.8).is_nan());
}

#[test]
fn job_sheet_rows_in_order() {
    let mut state = WellState::default();
    state.cement.slurry_start_depth_ft = 1800.0;
    state.cement.slurry_depth_ft = 600.0;
    let report = cement_job_report(&state);

    let names: Vec<&str> = report.rows.iter().map(|r| r.parameter).collect();
    assert_eq!(
        names,
        [
            "Slurry Start Depth",
            "Slurry End Depth",
            "Slurry Height",
            "Slurry Density",
            "Slurry Yield",
            "Open Hole Diameter",
            "Casing Outer Diameter",
            "Annular Volume",
            "Cement Volume",
            "Cement Weight",
        ]
    );
    assert_eq!(report.rows[1].value, 1200.0);
    assert_eq!(report.rows[2].formatted_value(), "600.00 ft");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["rows"][0]["parameter"], "Slurry Start Depth");
}
