//! Well Schematic - casing / cement schematic and cement job calculator
//!
//! # Usage
//!
//! ```bash
//! # Schematic of the built-in reference well
//! well-schematic render > well.svg
//!
//! # Schematic of a well file, rejecting implausible input
//! well-schematic render --well my_well.toml --strict --output my_well.svg
//!
//! # Cement job sheet as JSON
//! well-schematic cement --well my_well.toml --json
//!
//! # Starting point for a new well file
//! well-schematic template > my_well.toml
//! ```
//!
//! # Environment Variables
//!
//! - `WELL_SCHEMATIC_CONFIG`: Path to a layout/palette TOML file
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use well_schematic::{
    cement_job_report, map_well, Scene, SchematicConfig, Strictness, WellAction, WellState,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "well-schematic")]
#[command(about = "Well construction schematic and cement job calculator")]
#[command(version)]
struct CliArgs {
    /// Layout/palette TOML file. Without it the layout comes from
    /// $WELL_SCHEMATIC_CONFIG, then ./schematic.toml, then built-in defaults;
    /// an unusable file on that path is logged and skipped.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: SubCommand,
}

/// Options shared by every command that reads a well.
#[derive(clap::Args, Debug)]
struct WellArgs {
    /// Well description TOML file (default: built-in reference well)
    #[arg(long)]
    well: Option<PathBuf>,

    /// JSON array of edits applied to the well before use
    #[arg(long)]
    actions: Option<PathBuf>,

    /// Reject physically implausible wells instead of drawing them as-is
    #[arg(long)]
    strict: bool,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Draw the well schematic
    Render {
        #[command(flatten)]
        well: WellArgs,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = RenderFormat::Svg)]
        format: RenderFormat,
    },

    /// Print the cement job sheet
    Cement {
        #[command(flatten)]
        well: WellArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the reference well as a well file
    Template,

    /// Print the effective layout configuration
    Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RenderFormat {
    /// SVG document
    Svg,
    /// Mapped geometry as JSON
    Json,
}

// ============================================================================
// Input Loading
// ============================================================================

fn load_layout(path: Option<&Path>) -> Result<SchematicConfig> {
    match path {
        Some(p) => {
            let config = SchematicConfig::load_from_file(p)
                .with_context(|| format!("Failed to load layout config {}", p.display()))?;
            info!(path = %p.display(), "Loaded schematic config");
            Ok(config)
        }
        None => Ok(SchematicConfig::load()),
    }
}

fn load_well(args: &WellArgs) -> Result<WellState> {
    let strictness = if args.strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };

    let state = match &args.well {
        Some(path) => WellState::load_from_file(path, strictness)
            .with_context(|| format!("Failed to load well {}", path.display()))?,
        None => {
            info!("No --well given, using the reference well");
            WellState::default()
        }
    };

    let Some(actions_path) = &args.actions else {
        return Ok(state);
    };
    let contents = fs::read_to_string(actions_path)
        .with_context(|| format!("Failed to read {}", actions_path.display()))?;
    let actions: Vec<WellAction> = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid actions in {}", actions_path.display()))?;
    info!(count = actions.len(), "Applying well edits");

    let state = state.apply_all(actions);
    state.check(strictness).context("Edited well is implausible")?;
    Ok(state)
}

fn emit(contents: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = contents.len(), "Wrote output");
        }
        None => print!("{contents}"),
    }
    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

fn run_render(
    config: &SchematicConfig,
    well: &WellArgs,
    output: Option<&Path>,
    format: RenderFormat,
) -> Result<()> {
    let state = load_well(well)?;
    let geometry = map_well(&state, config);

    let contents = match format {
        RenderFormat::Svg => Scene::build(&geometry, config).to_svg(),
        RenderFormat::Json => {
            let mut json = serde_json::to_string_pretty(&geometry)
                .context("Failed to serialize geometry")?;
            json.push('\n');
            json
        }
    };
    emit(&contents, output)
}

fn run_cement(well: &WellArgs, json: bool) -> Result<()> {
    let state = load_well(well)?;
    let report = cement_job_report(&state);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{out}");
        return Ok(());
    }

    let width = report
        .rows
        .iter()
        .map(|row| row.parameter.len())
        .max()
        .unwrap_or(0);
    for row in &report.rows {
        println!("{:<width$}  {}", row.parameter, row.formatted_value());
    }
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Initialize logging; stderr keeps stdout clean for SVG/JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let config = load_layout(args.config.as_deref())?;

    match args.command {
        SubCommand::Render {
            well,
            output,
            format,
        } => run_render(&config, &well, output.as_deref(), format),
        SubCommand::Cement { well, json } => run_cement(&well, json),
        SubCommand::Template => {
            print!("{}", WellState::default().to_toml()?);
            Ok(())
        }
        SubCommand::Layout => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
