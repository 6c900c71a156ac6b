//! Config validation: unknown-key detection with Levenshtein suggestions,
//! layout range checks, and opt-in plausibility checks for well files.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use super::defaults::MAX_SUGGESTION_DISTANCE;
use crate::types::WellState;
use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationWarning {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, "; did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `SchematicConfig`.
///
/// This is maintained manually to match the struct hierarchy in
/// schematic_config.rs. Any new field must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [canvas]
        "canvas",
        "canvas.width_px",
        "canvas.height_px",
        "canvas.pixels_per_inch",
        "canvas.depth_ft_per_px",
        "canvas.well_center_x",
        "canvas.ground_level_y",
        "canvas.derrick_half_width_px",
        "canvas.derrick_top_y",
        "canvas.packer_width_per_inch",
        "canvas.packer_height_px",
        "canvas.label_offset_px",
        // [legend]
        "legend",
        "legend.x",
        "legend.y",
        "legend.row_height_px",
        "legend.swatch_width_px",
        "legend.label_width_px",
        // [palette]
        "palette",
        "palette.sections",
        "palette.background",
        "palette.open_hole",
        "palette.cement",
        "palette.packer",
        "palette.sky",
        "palette.ground",
        "palette.derrick",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (k, levenshtein(unknown, k)))
        .filter(|&(_, dist)| dist <= MAX_SUGGESTION_DISTANCE)
        // Ties broken alphabetically so suggestions are stable
        .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys; it only warns.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| {
            let suggestion = suggest_correction(&key, &known);
            ValidationWarning {
                message: format!("Unknown config key '{key}'"),
                field: key,
                suggestion,
            }
        })
        .collect()
}

// ============================================================================
// Layout Range Validation
// ============================================================================

/// Validate layout ranges on a parsed `SchematicConfig`.
///
/// Returns (errors, warnings): errors are values that would break every
/// band (zero or non-finite scales); warnings are suspicious but drawable.
pub fn validate_layout_ranges(
    config: &super::SchematicConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let c = &config.canvas;
    for (name, value) in [
        ("canvas.width_px", c.width_px),
        ("canvas.height_px", c.height_px),
        ("canvas.pixels_per_inch", c.pixels_per_inch),
        ("canvas.depth_ft_per_px", c.depth_ft_per_px),
        ("legend.row_height_px", config.legend.row_height_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            errors.push(format!("{name} = {value} must be a finite number > 0"));
        }
    }

    if config.palette.sections.is_empty() {
        errors.push("palette.sections must contain at least one colour".to_string());
    }

    // Well axis off-canvas: drawable but nothing will be visible
    if c.well_center_x < 0.0 || c.well_center_x > c.width_px {
        warnings.push(ValidationWarning::new(
            "canvas.well_center_x",
            format!(
                "well_center_x = {:.1} lies outside the canvas (0-{:.1} px)",
                c.well_center_x, c.width_px
            ),
        ));
    }

    if c.ground_level_y < 0.0 || c.ground_level_y > c.height_px {
        warnings.push(ValidationWarning::new(
            "canvas.ground_level_y",
            format!(
                "ground_level_y = {:.1} lies outside the canvas (0-{:.1} px)",
                c.ground_level_y, c.height_px
            ),
        ));
    }

    (errors, warnings)
}

// ============================================================================
// Well Plausibility (opt-in)
// ============================================================================

/// Report physically implausible well descriptions.
///
/// The mapper and calculator accept anything; this check exists for callers
/// that want to refuse nonsense up front (`--strict` on the CLI).
pub fn check_plausibility(state: &WellState) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if state.sections.is_empty() {
        warnings.push(ValidationWarning::new("section", "Well has no casing sections"));
    }

    let mut prev_depth = 0.0;
    for (i, s) in state.sections.iter().enumerate() {
        let n = i + 1;
        if s.internal_diameter_in <= 0.0 || !s.internal_diameter_in.is_finite() {
            warnings.push(ValidationWarning::new(
                format!("section[{i}].internal_diameter_in"),
                format!("Section {n}: internal diameter {} in must be > 0", s.internal_diameter_in),
            ));
        }
        if s.wall_thickness_in < 0.0 || !s.wall_thickness_in.is_finite() {
            warnings.push(ValidationWarning::new(
                format!("section[{i}].wall_thickness_in"),
                format!("Section {n}: wall thickness {} in cannot be negative", s.wall_thickness_in),
            ));
        }
        // Strict ordering: a section must end below the previous shoe
        if s.depth_ft <= prev_depth || !s.depth_ft.is_finite() {
            warnings.push(ValidationWarning::new(
                format!("section[{i}].depth_ft"),
                format!(
                    "Section {n}: depth {:.1} ft must be greater than {:.1} ft",
                    s.depth_ft, prev_depth
                ),
            ));
        }
        prev_depth = s.depth_ft;
    }

    let total_depth = state.total_depth_ft();

    for (i, f) in state.fluids.iter().enumerate() {
        if f.depth_ft < 0.0 {
            warnings.push(ValidationWarning::new(
                format!("fluid[{i}].depth_ft"),
                format!("Fluid '{}': depth {:.1} ft cannot be negative", f.fluid_type, f.depth_ft),
            ));
        }
        if f.density < 0.0 {
            warnings.push(ValidationWarning::new(
                format!("fluid[{i}].density"),
                format!("Fluid '{}': density {:.2} cannot be negative", f.fluid_type, f.density),
            ));
        }
    }

    if state.open_hole_diameter_in <= 0.0 {
        warnings.push(ValidationWarning::new(
            "open_hole_diameter_in",
            format!("Open hole diameter {} in must be > 0", state.open_hole_diameter_in),
        ));
    }

    let od = state.casing_outer_diameter_in();
    if od >= state.open_hole_diameter_in {
        warnings.push(ValidationWarning::new(
            "open_hole_diameter_in",
            format!(
                "Casing OD {od:.2} in does not fit the {:.2} in open hole; annular volume will be negative",
                state.open_hole_diameter_in
            ),
        ));
    }

    let c = &state.cement;
    if c.slurry_depth_ft < 0.0 || c.slurry_depth_ft > total_depth {
        warnings.push(ValidationWarning::new(
            "cement.slurry_depth_ft",
            format!(
                "Slurry height {:.1} ft is outside the well (0-{total_depth:.1} ft)",
                c.slurry_depth_ft
            ),
        ));
    }
    if c.inner_slurry_depth_ft < 0.0 || c.inner_slurry_depth_ft > total_depth {
        warnings.push(ValidationWarning::new(
            "cement.inner_slurry_depth_ft",
            format!(
                "Inner slurry height {:.1} ft is outside the well (0-{total_depth:.1} ft)",
                c.inner_slurry_depth_ft
            ),
        ));
    }
    if c.slurry_yield <= 0.0 {
        warnings.push(ValidationWarning::new(
            "cement.slurry_yield",
            format!("Slurry yield {} ft³/sack must be > 0", c.slurry_yield),
        ));
    }
    if c.slurry_density_ppg <= 0.0 {
        warnings.push(ValidationWarning::new(
            "cement.slurry_density_ppg",
            format!("Slurry density {} ppg must be > 0", c.slurry_density_ppg),
        ));
    }

    if let Some(packer) = state.packer_depth_ft {
        if !(0.0..=total_depth).contains(&packer) {
            warnings.push(ValidationWarning::new(
                "packer_depth_ft",
                format!("Packer depth {packer:.1} ft is outside the well (0-{total_depth:.1} ft)"),
            ));
        }
    }

    warnings
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchematicConfig;
    use crate::types::{Fluid, WellSection};

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(levenshtein("hello", "hello"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein("pixels_per_inhc", "pixels_per_inch"), 2);
        assert_eq!(levenshtein("cemnt", "cement"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_walk_toml_keys_nested() {
        let toml: toml::Value = r##"
            [canvas]
            width_px = 640.0
            [palette]
            cement = "#333333"
        "##
        .parse()
        .unwrap();
        let keys = walk_toml_keys(&toml, "");
        assert!(keys.contains(&"canvas".to_string()));
        assert!(keys.contains(&"canvas.width_px".to_string()));
        assert!(keys.contains(&"palette.cement".to_string()));
    }

    #[test]
    fn test_typo_key_produces_warning_with_suggestion() {
        let toml_str = r#"
[canvas]
pixels_per_inhc = 8.0
"#;
        let warnings = validate_unknown_keys(toml_str);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].suggestion.as_deref(),
            Some("canvas.pixels_per_inch")
        );
    }

    #[test]
    fn test_unknown_section_produces_warning() {
        let toml_str = r##"
[colours]
cement = "#333333"
"##;
        let warnings = validate_unknown_keys(toml_str);
        assert!(warnings.iter().any(|w| w.field == "colours"));
    }

    #[test]
    fn test_suggest_correction_no_match_for_garbage() {
        let known = known_config_keys();
        assert!(suggest_correction("completely_unrelated_garbage_key_xyz", &known).is_none());
    }

    #[test]
    fn test_layout_defaults_clean() {
        let (errors, warnings) = validate_layout_ranges(&SchematicConfig::default());
        assert!(errors.is_empty(), "{errors:?}");
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn test_layout_nan_scale_is_error() {
        let mut config = SchematicConfig::default();
        config.canvas.pixels_per_inch = f64::NAN;
        let (errors, _) = validate_layout_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("pixels_per_inch")));
    }

    #[test]
    fn test_layout_empty_palette_is_error() {
        let mut config = SchematicConfig::default();
        config.palette.sections.clear();
        let (errors, _) = validate_layout_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("palette.sections")));
    }

    #[test]
    fn test_layout_axis_off_canvas_warns() {
        let mut config = SchematicConfig::default();
        config.canvas.well_center_x = 900.0;
        let (errors, warnings) = validate_layout_ranges(&config);
        assert!(errors.is_empty());
        assert!(warnings.iter().any(|w| w.field == "canvas.well_center_x"));
    }

    #[test]
    fn test_default_well_is_plausible() {
        let warnings = check_plausibility(&WellState::default());
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn test_non_increasing_depths_flagged() {
        let state = WellState {
            sections: vec![
                WellSection::new(5.0, 0.5, 1000.0),
                WellSection::new(4.0, 0.4, 1000.0),
            ],
            ..WellState::default()
        };
        let warnings = check_plausibility(&state);
        assert!(warnings.iter().any(|w| w.field == "section[1].depth_ft"));
    }

    #[test]
    fn test_oversized_slurry_and_casing_flagged() {
        let mut state = WellState::default();
        state.cement.slurry_depth_ft = 5000.0;
        state.open_hole_diameter_in = 4.0;
        let warnings = check_plausibility(&state);
        assert!(warnings.iter().any(|w| w.field == "cement.slurry_depth_ft"));
        assert!(warnings
            .iter()
            .any(|w| w.field == "open_hole_diameter_in" && w.message.contains("negative")));
    }

    #[test]
    fn test_negative_fluid_values_flagged() {
        let state = WellState {
            fluids: vec![Fluid::new("Brine", -10.0, -1.2)],
            ..WellState::default()
        };
        let warnings = check_plausibility(&state);
        assert!(warnings.iter().any(|w| w.field == "fluid[0].depth_ft"));
        assert!(warnings.iter().any(|w| w.field == "fluid[0].density"));
    }

    #[test]
    fn test_zero_yield_flagged() {
        let mut state = WellState::default();
        state.cement.slurry_yield = 0.0;
        let warnings = check_plausibility(&state);
        assert!(warnings.iter().any(|w| w.field == "cement.slurry_yield"));
    }
}
