//! SVG document writer for a [`Scene`]

use super::scene::{Scene, Shape, Stroke, Text, TextAnchor};
use std::fmt::Write as _;

impl Scene {
    /// Serialize the scene as a standalone SVG document.
    ///
    /// `width`/`height` are used both as the SVG size attributes and for
    /// `viewBox="0 0 width height"`.
    pub fn to_svg(&self) -> String {
        let width = fmt_num(self.width);
        let height = fmt_num(self.height);

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        for shape in &self.shapes {
            write_shape(&mut svg, shape);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn write_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Rect { band, fill, stroke } => {
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\"{}/>",
                fmt_num(band.x),
                fmt_num(band.y),
                fmt_num(band.width),
                fmt_num(band.height),
                stroke_attrs(stroke.as_ref()),
            );
        }
        Shape::Polygon {
            points,
            fill,
            stroke,
        } => {
            let points = points
                .iter()
                .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(
                out,
                "<polygon points=\"{points}\" fill=\"{fill}\"{}/>",
                stroke_attrs(stroke.as_ref()),
            );
        }
        Shape::Text(text) => write_text(out, text),
    }
}

fn write_text(out: &mut String, text: &Text) {
    let mut attrs = String::new();
    if text.anchor == TextAnchor::Middle {
        attrs.push_str(" text-anchor=\"middle\"");
    }
    if text.centered {
        attrs.push_str(" dominant-baseline=\"middle\"");
    }
    if text.bold {
        attrs.push_str(" font-weight=\"bold\"");
    }
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"{}\"{attrs}>{}</text>",
        fmt_num(text.x),
        fmt_num(text.y),
        text.fill,
        fmt_num(text.font_size),
        escape_text(&text.content),
    );
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    stroke.map_or_else(String::new, |s| {
        format!(" stroke=\"{}\" stroke-width=\"{}\"", s.color, fmt_num(s.width))
    })
}

/// Whole numbers without a fraction, everything else to at most three
/// decimals with trailing zeros dropped. Non-finite values print as-is.
fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
