//! Well description loader
//!
//! Reads a well (sections, fluids, cement job, packer) from a TOML file.
//! Structure is enforced (at least one section); physical plausibility is only
//! enforced when the caller asks for strict loading.

use super::validation::check_plausibility;
use crate::types::WellState;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum WellFileError {
    #[error("Well file I/O error ({}): {1}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Well file parse error ({}): {1}", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Well serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Well file {} defines no casing sections", .0.display())]
    NoSections(PathBuf),

    #[error("Well description is implausible:\n  - {}", .0.join("\n  - "))]
    Implausible(Vec<String>),
}

/// How much checking to apply when loading a well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Implausible values are logged and drawn as-is.
    #[default]
    Lenient,
    /// Implausible values are rejected.
    Strict,
}

impl WellState {
    /// Load a well from a TOML file.
    pub fn load_from_file(path: &Path, strictness: Strictness) -> Result<Self, WellFileError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| WellFileError::Io(path.to_path_buf(), e))?;
        let state: Self =
            toml::from_str(&contents).map_err(|e| WellFileError::Parse(path.to_path_buf(), e))?;

        if state.sections.is_empty() {
            return Err(WellFileError::NoSections(path.to_path_buf()));
        }

        state.check(strictness)?;

        info!(
            path = %path.display(),
            sections = state.sections.len(),
            fluids = state.fluids.len(),
            total_depth_ft = state.total_depth_ft(),
            "Loaded well description"
        );
        Ok(state)
    }

    /// Run plausibility checks: log them, or fail in strict mode.
    pub fn check(&self, strictness: Strictness) -> Result<(), WellFileError> {
        let warnings = check_plausibility(self);
        if warnings.is_empty() {
            return Ok(());
        }

        match strictness {
            Strictness::Lenient => {
                for w in &warnings {
                    warn!(field = %w.field, "{}", w);
                }
                Ok(())
            }
            Strictness::Strict => Err(WellFileError::Implausible(
                warnings.into_iter().map(|w| w.message).collect(),
            )),
        }
    }

    /// Serialize the well to TOML in the same layout the loader reads.
    pub fn to_toml(&self) -> Result<String, WellFileError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
