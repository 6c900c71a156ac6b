//! Mapped schematic geometry: bands, markers and legend entries in canvas space

use super::Rgb;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas pixels.
///
/// Width or height may be zero or negative for degenerate input; nothing
/// here normalises them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Band {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A text label anchored at a canvas point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// One casing section: coloured outer wall with a background-filled bore on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBand {
    pub index: usize,
    pub top_ft: f64,
    pub bottom_ft: f64,
    pub outer: Band,
    pub inner: Band,
    pub color: Rgb,
}

/// One visible fluid column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidBand {
    /// Position of the fluid in the input list
    pub index: usize,
    pub top_ft: f64,
    pub bottom_ft: f64,
    pub band: Band,
    pub color: Rgb,
    pub label: Label,
}

/// Annular cement column, drawn as strips either side of the casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CementBand {
    pub top_ft: f64,
    pub bottom_ft: f64,
    pub left: Band,
    pub right: Band,
    pub color: Rgb,
    pub label: Label,
}

/// Cement left inside the last casing string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerSlurryBand {
    pub top_ft: f64,
    pub bottom_ft: f64,
    pub band: Band,
    pub color: Rgb,
    pub label: Label,
}

/// Packer marker centred on its setting depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackerMarker {
    pub depth_ft: f64,
    pub band: Band,
    pub color: Rgb,
}

/// What a legend row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendKind {
    OpenHole,
    Section,
    Fluid,
    Cement,
    InnerSlurry,
    Packer,
}

/// Legend row: swatch colour, name and optional detail text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub kind: LegendKind,
    pub color: Rgb,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Everything the mapper derives from one well snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellGeometry {
    pub total_depth_ft: f64,
    pub open_hole_diameter_in: f64,
    pub open_hole: Band,
    pub sections: Vec<SectionBand>,
    pub fluids: Vec<FluidBand>,
    pub cement: CementBand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_slurry: Option<InnerSlurryBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packer: Option<PackerMarker>,
    pub legend: Vec<LegendEntry>,
}
