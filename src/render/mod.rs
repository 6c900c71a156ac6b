//! Schematic rendering
//!
//! [`Scene::build`] turns mapped [`WellGeometry`](crate::types::WellGeometry)
//! into an ordered list of rectangles, polygons and text; [`Scene::to_svg`]
//! writes that list out as an SVG document.

mod scene;
mod svg;

pub use scene::{Scene, Shape, Stroke, Text, TextAnchor};

use crate::config::SchematicConfig;
use crate::geometry::map_well;
use crate::types::WellState;

/// Map and render a well in one step.
pub fn render_svg(state: &WellState, config: &SchematicConfig) -> String {
    Scene::build(&map_well(state, config), config).to_svg()
}
