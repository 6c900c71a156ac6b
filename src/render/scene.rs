//! Vector scene: mapped geometry plus sky, ground, derrick, header and legend

use crate::config::SchematicConfig;
use crate::types::{Band, Label, Rgb, WellGeometry};

const HEADER_X: f64 = 10.0;
const HEADER_FIRST_Y: f64 = 30.0;
const HEADER_LINE_HEIGHT: f64 = 20.0;
const HEADER_FONT_SIZE: f64 = 14.0;
const LABEL_FONT_SIZE: f64 = 12.0;
const LEGEND_TITLE_OFFSET: f64 = 20.0;
const LEGEND_TEXT_PADDING: f64 = 5.0;
const LEGEND_SWATCH_GAP: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub fill: Rgb,
    pub font_size: f64,
    pub anchor: TextAnchor,
    /// Vertically centred on `y` rather than sitting on it
    pub centered: bool,
    pub bold: bool,
}

impl Text {
    /// Plain left-anchored text sitting on its baseline.
    fn plain(x: f64, y: f64, content: String, font_size: f64) -> Self {
        Self {
            x,
            y,
            content,
            fill: Rgb::BLACK,
            font_size,
            anchor: TextAnchor::Start,
            centered: false,
            bold: false,
        }
    }

    /// Band label, vertically centred on the label point.
    fn label(label: &Label, fill: Rgb, anchor: TextAnchor) -> Self {
        Self {
            fill,
            anchor,
            centered: true,
            ..Self::plain(label.x, label.y, label.text.clone(), LABEL_FONT_SIZE)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        band: Band,
        fill: Rgb,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: Rgb,
        stroke: Option<Stroke>,
    },
    Text(Text),
}

impl Shape {
    const fn rect(band: Band, fill: Rgb) -> Self {
        Self::Rect {
            band,
            fill,
            stroke: None,
        }
    }
}

/// Ordered list of shapes; later shapes paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Lay out the full schematic.
    ///
    /// Paint order: sky, ground, derrick, open hole, fluids, sections,
    /// annular cement, inner slurry, packer, header text, legend. Fluids go
    /// under the sections so each casing bore shows as background colour.
    pub fn build(geometry: &WellGeometry, config: &SchematicConfig) -> Self {
        let canvas = &config.canvas;
        let palette = &config.palette;
        let mut shapes = Vec::new();

        // Surface furniture
        shapes.push(Shape::rect(
            Band::new(0.0, 0.0, canvas.width_px, canvas.ground_level_y),
            palette.sky,
        ));
        shapes.push(Shape::rect(
            Band::new(
                0.0,
                canvas.ground_level_y,
                canvas.width_px,
                canvas.height_px - canvas.ground_level_y,
            ),
            palette.ground,
        ));
        shapes.push(Shape::Polygon {
            points: vec![
                (
                    canvas.well_center_x - canvas.derrick_half_width_px,
                    canvas.ground_level_y,
                ),
                (
                    canvas.well_center_x + canvas.derrick_half_width_px,
                    canvas.ground_level_y,
                ),
                (canvas.well_center_x, canvas.derrick_top_y),
            ],
            fill: palette.derrick,
            stroke: Some(Stroke {
                color: Rgb::BLACK,
                width: 2.0,
            }),
        });

        shapes.push(Shape::rect(geometry.open_hole, palette.open_hole));

        for fluid in &geometry.fluids {
            shapes.push(Shape::rect(fluid.band, fluid.color));
            shapes.push(Shape::Text(Text::label(
                &fluid.label,
                Rgb::BLACK,
                TextAnchor::Start,
            )));
        }

        for section in &geometry.sections {
            shapes.push(Shape::Rect {
                band: section.outer,
                fill: section.color,
                stroke: Some(Stroke {
                    color: Rgb::BLACK,
                    width: 1.0,
                }),
            });
            shapes.push(Shape::rect(section.inner, palette.background));
        }

        let cement = &geometry.cement;
        shapes.push(Shape::rect(cement.left, cement.color));
        shapes.push(Shape::rect(cement.right, cement.color));
        shapes.push(Shape::Text(Text::label(
            &cement.label,
            Rgb::BLACK,
            TextAnchor::Start,
        )));

        if let Some(inner) = &geometry.inner_slurry {
            shapes.push(Shape::rect(inner.band, inner.color));
            shapes.push(Shape::Text(Text::label(
                &inner.label,
                Rgb::WHITE,
                TextAnchor::Middle,
            )));
        }

        if let Some(packer) = &geometry.packer {
            shapes.push(Shape::rect(packer.band, packer.color));
        }

        shapes.extend(header_lines(geometry));
        shapes.extend(legend_shapes(geometry, config));

        Self {
            width: canvas.width_px,
            height: canvas.height_px,
            shapes,
        }
    }

    /// All text content in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text(text) => Some(text.content.as_str()),
            _ => None,
        })
    }
}

fn header_lines(geometry: &WellGeometry) -> Vec<Shape> {
    let mut lines = vec![
        format!("Total Depth: {:.2} ft", geometry.total_depth_ft),
        format!("Open Hole Diameter: {:.2} in", geometry.open_hole_diameter_in),
    ];
    if let Some(packer) = &geometry.packer {
        lines.push(format!("Packer Depth: {:.2} ft", packer.depth_ft));
    }

    let mut y = HEADER_FIRST_Y;
    lines
        .into_iter()
        .map(|line| {
            let shape = Shape::Text(Text::plain(HEADER_X, y, line, HEADER_FONT_SIZE));
            y += HEADER_LINE_HEIGHT;
            shape
        })
        .collect()
}

/// Legend table: bold title, then one row per entry with a swatch, the
/// label column and an optional details column.
fn legend_shapes(geometry: &WellGeometry, config: &SchematicConfig) -> Vec<Shape> {
    let legend = &config.legend;
    let mut shapes = vec![Shape::Text(Text {
        bold: true,
        ..Text::plain(
            legend.x,
            legend.y - LEGEND_TITLE_OFFSET,
            "Legend".to_string(),
            HEADER_FONT_SIZE,
        )
    })];

    let label_x = legend.x + legend.swatch_width_px + LEGEND_TEXT_PADDING;
    let details_x = legend.x + legend.swatch_width_px + legend.label_width_px + LEGEND_TEXT_PADDING;

    let mut row_y = legend.y;
    for entry in &geometry.legend {
        let text_y = row_y + legend.row_height_px / 2.0;
        shapes.push(Shape::rect(
            Band::new(
                legend.x,
                row_y,
                legend.swatch_width_px,
                legend.row_height_px - LEGEND_SWATCH_GAP,
            ),
            entry.color,
        ));
        shapes.push(Shape::Text(Text {
            centered: true,
            ..Text::plain(label_x, text_y, entry.label.clone(), LABEL_FONT_SIZE)
        }));
        if let Some(details) = &entry.details {
            shapes.push(Shape::Text(Text {
                centered: true,
                ..Text::plain(details_x, text_y, details.clone(), LABEL_FONT_SIZE)
            }));
        }
        row_y += legend.row_height_px;
    }
    shapes
}
