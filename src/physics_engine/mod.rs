//! Physics Engine Module
//!
//! Deterministic well-construction calculations. Everything here is a pure
//! function of its inputs and is recomputed on every state change.
//!
//! - `calculate_annular_volume()` - Open hole / casing annulus volume
//! - `calculate_cement_volume()` / `calculate_cement_weight()` - Slurry quantities
//! - `cement_job_report()` - Job sheet for a complete well

pub mod cementing;

pub use cementing::{
    calculate_annular_volume, calculate_cement_volume, calculate_cement_volumes,
    calculate_cement_weight, cement_job_report, cement_volumes_for,
};
