//! Depth and diameter transforms from well units to canvas pixels

use crate::config::CanvasConfig;
use crate::types::Band;

impl CanvasConfig {
    /// Depth (ft) to pixels below the surface line.
    pub fn scale_depth(&self, depth_ft: f64) -> f64 {
        depth_ft / self.depth_ft_per_px
    }

    /// Depth (ft) to canvas y.
    pub fn depth_to_y(&self, depth_ft: f64) -> f64 {
        self.ground_level_y + self.scale_depth(depth_ft)
    }

    /// Diameter (in) to full width in pixels.
    pub fn diameter_to_width(&self, diameter_in: f64) -> f64 {
        diameter_in * self.pixels_per_inch
    }

    /// Diameter (in) to half width in pixels, measured from the well axis.
    pub fn half_width(&self, diameter_in: f64) -> f64 {
        self.diameter_to_width(diameter_in) / 2.0
    }

    /// Band of the given diameter centred on the well axis over a depth
    /// interval. Height is negative when `bottom_ft < top_ft`.
    pub fn centered_band(&self, diameter_in: f64, top_ft: f64, bottom_ft: f64) -> Band {
        Band::new(
            self.well_center_x - self.half_width(diameter_in),
            self.depth_to_y(top_ft),
            self.diameter_to_width(diameter_in),
            self.scale_depth(bottom_ft) - self.scale_depth(top_ft),
        )
    }

    /// y of the midpoint of a depth interval, where band labels sit.
    pub fn mid_y(&self, top_ft: f64, bottom_ft: f64) -> f64 {
        self.ground_level_y + (self.scale_depth(top_ft) + self.scale_depth(bottom_ft)) / 2.0
    }
}
