//! Fill colours derived from well data

use crate::config::defaults::FLUID_DENSITY_SHADE_FACTOR;
use crate::types::Rgb;

/// Blue shade for a fluid column: denser fluid, darker blue.
///
/// `intensity = clamp(floor(255 - density * 50), 0, 255)`, colour
/// `rgb(intensity, intensity, 255)`. NaN density maps to intensity 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fluid_color(density: f64) -> Rgb {
    // Clamped to 0..=255 before the cast; NaN casts to 0
    let intensity = (255.0 - density * FLUID_DENSITY_SHADE_FACTOR)
        .floor()
        .clamp(0.0, 255.0) as u8;
    Rgb::new(intensity, intensity, 255)
}
