//! Primary cementing calculations
//!
//! Annular volume, slurry quantity and slurry weight for a single-stage
//! cement job placed in the open-hole annulus.
//!
//! None of these functions guard their inputs: zero yield, inverted
//! diameters or NaN propagate straight into the result.

use crate::types::{CementJobReport, CementReportRow, CementVolumes, WellState};
use std::f64::consts::PI;

/// Inches of diameter to feet of radius (÷12 for feet, ÷2 for radius).
const DIAMETER_IN_TO_RADIUS_FT: f64 = 24.0;

// ============================================================================
// Volume Calculations
// ============================================================================

/// Calculate annular volume between open hole and casing
///
/// Formula: V = (π × (OH/24)² − π × (OD/24)²) × H
///
/// Where:
/// - OH = Open hole diameter (inches)
/// - OD = Casing outer diameter (inches)
/// - H = Slurry column height (ft)
///
/// Returns volume in ft³. Negative when the casing is wider than the hole.
pub fn calculate_annular_volume(
    slurry_depth_ft: f64,
    open_hole_diameter_in: f64,
    casing_outer_diameter_in: f64,
) -> f64 {
    let hole_area = PI * (open_hole_diameter_in / DIAMETER_IN_TO_RADIUS_FT).powi(2);
    let casing_area = PI * (casing_outer_diameter_in / DIAMETER_IN_TO_RADIUS_FT).powi(2);
    (hole_area - casing_area) * slurry_depth_ft
}

/// Calculate cement quantity from annular volume and slurry yield
///
/// Formula: Q = V / Y, with Y in ft³/sack.
///
/// The job sheet labels this a volume although the unit works out to sacks.
/// Kept as-is so figures match sheets already issued.
pub fn calculate_cement_volume(annular_volume_ft3: f64, slurry_yield: f64) -> f64 {
    annular_volume_ft3 / slurry_yield
}

/// Calculate cement weight
///
/// Formula: W = Q × ρ, with ρ the slurry density in ppg.
pub fn calculate_cement_weight(cement_volume: f64, slurry_density_ppg: f64) -> f64 {
    cement_volume * slurry_density_ppg
}

/// Run the full calculator: annular volume, cement volume and weight.
pub fn calculate_cement_volumes(
    slurry_depth_ft: f64,
    open_hole_diameter_in: f64,
    casing_outer_diameter_in: f64,
    slurry_yield: f64,
    slurry_density_ppg: f64,
) -> CementVolumes {
    let annular_volume_ft3 =
        calculate_annular_volume(slurry_depth_ft, open_hole_diameter_in, casing_outer_diameter_in);
    let cement_volume = calculate_cement_volume(annular_volume_ft3, slurry_yield);
    let cement_weight_lbs = calculate_cement_weight(cement_volume, slurry_density_ppg);

    CementVolumes {
        annular_volume_ft3,
        cement_volume,
        cement_weight_lbs,
    }
}

// ============================================================================
// Job Sheet
// ============================================================================

/// Calculate cement volumes for a well, using the deepest casing's outer
/// diameter.
pub fn cement_volumes_for(state: &WellState) -> CementVolumes {
    let cement = &state.cement;
    calculate_cement_volumes(
        cement.slurry_depth_ft,
        state.open_hole_diameter_in,
        state.casing_outer_diameter_in(),
        cement.slurry_yield,
        cement.slurry_density_ppg,
    )
}

/// Build the cement job sheet for a well.
pub fn cement_job_report(state: &WellState) -> CementJobReport {
    let cement = &state.cement;
    let volumes = cement_volumes_for(state);

    let row = |parameter: &'static str, value: f64, unit: &'static str| CementReportRow {
        parameter,
        value,
        unit,
    };

    let rows = vec![
        row("Slurry Start Depth", cement.slurry_start_depth_ft, "ft"),
        row(
            "Slurry End Depth",
            cement.slurry_start_depth_ft - cement.slurry_depth_ft,
            "ft",
        ),
        row("Slurry Height", cement.slurry_depth_ft, "ft"),
        row("Slurry Density", cement.slurry_density_ppg, "ppg"),
        row("Slurry Yield", cement.slurry_yield, "ft³/sack"),
        row("Open Hole Diameter", state.open_hole_diameter_in, "in"),
        row("Casing Outer Diameter", state.casing_outer_diameter_in(), "in"),
        row("Annular Volume", volumes.annular_volume_ft3, "ft³"),
        row("Cement Volume", volumes.cement_volume, "ft³"),
        row("Cement Weight", volumes.cement_weight_lbs, "lbs"),
    ];

    CementJobReport { volumes, rows }
}
