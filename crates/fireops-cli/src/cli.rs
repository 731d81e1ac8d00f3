//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fireops_app::logging::Verbosity;
use fireops_domain::model::{PersonId, VehicleId};
use fireops_types::OutputFormat;

#[derive(Parser)]
#[command(name = "fireops")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Assign drivers and firefighters to station vehicles")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Roster TOML file. Uses config value, then the built-in station roster.
    #[arg(long, global = true)]
    pub roster: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// `PERSON@VEHICLE` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub person: PersonId,
    pub vehicle: VehicleId,
}

pub fn parse_placement(value: &str) -> Result<Placement, String> {
    let (person, vehicle) = value
        .split_once('@')
        .ok_or_else(|| format!("expected PERSON@VEHICLE, got '{}'", value))?;
    let (person, vehicle) = (person.trim(), vehicle.trim());
    if person.is_empty() || vehicle.is_empty() {
        return Err(format!("expected PERSON@VEHICLE, got '{}'", value));
    }
    Ok(Placement {
        person: PersonId::from(person),
        vehicle: VehicleId::from(vehicle),
    })
}

pub fn parse_verbosity(value: &str) -> Result<Verbosity, String> {
    match value.to_ascii_lowercase().as_str() {
        "quiet" => Ok(Verbosity::Quiet),
        "normal" => Ok(Verbosity::Normal),
        "verbose" => Ok(Verbosity::Verbose),
        "trace" => Ok(Verbosity::Trace),
        other => Err(format!(
            "unknown verbosity '{}' (quiet, normal, verbose, trace)",
            other
        )),
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List station personnel and vehicles
    Roster,

    /// Assign people to vehicles, in the order given
    Assign {
        /// Placements as PERSON@VEHICLE (e.g., 2@1)
        #[arg(value_parser = parse_placement)]
        placements: Vec<Placement>,

        /// Run auto-assign before the manual placements
        #[arg(long)]
        auto: bool,

        /// Remove PERSON@VEHICLE before placing (repeatable)
        #[arg(long, value_parser = parse_placement)]
        unassign: Vec<Placement>,

        /// Publish dispatch notices to assigned personnel
        #[arg(long)]
        publish: bool,

        /// Export the final assignments (.csv sheet, otherwise JSON)
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Generate assignments automatically for all active vehicles
    Auto {
        /// Publish dispatch notices to assigned personnel
        #[arg(long)]
        publish: bool,

        /// Export the assignments (.csv sheet, otherwise JSON)
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default roster file
        #[arg(long)]
        set_roster: Option<PathBuf>,

        /// Forget the roster file and use the built-in station roster
        #[arg(long)]
        clear_roster: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set log verbosity (quiet, normal, verbose, trace)
        #[arg(long, value_parser = parse_verbosity)]
        set_verbosity: Option<Verbosity>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
