//! Cement job calculation results

use serde::{Deserialize, Serialize};

/// Output of the cement volume calculator.
///
/// `cement_volume` is annular volume divided by slurry yield (ft³ per sack),
/// which dimensionally is a sack count. It is reported under the "volume"
/// name the job sheet has always used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CementVolumes {
    /// Annular volume over the slurry height (ft³)
    pub annular_volume_ft3: f64,
    /// Annular volume / yield
    pub cement_volume: f64,
    /// Cement volume × slurry density
    pub cement_weight_lbs: f64,
}

/// One row of the cement job sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CementReportRow {
    pub parameter: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl CementReportRow {
    /// Value with two decimals and its unit, e.g. `223.40 ft³`.
    pub fn formatted_value(&self) -> String {
        format!("{:.2} {}", self.value, self.unit)
    }
}

/// Cement job sheet: the inputs echoed back plus the computed volumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CementJobReport {
    pub volumes: CementVolumes,
    pub rows: Vec<CementReportRow>,
}
