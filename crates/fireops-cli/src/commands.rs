//! Command handlers

use std::path::{Path, PathBuf};

use fireops_app::dispatch::export_snapshot;
use fireops_app::feedback::TracingSink;
use fireops_app::logging::{init_logging, Verbosity};
use fireops_app::repository::load_roster;
use fireops_app::{AssignmentSession, Config};
use fireops_domain::notify::RecordingSink;
use fireops_infra::sheet_export::export_assignment_csv;
use fireops_types::{Error, OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands, Placement};
use crate::output::{output_roster, output_session, SessionView};

type CliSession = AssignmentSession<TracingSink<RecordingSink>>;

/// Process exit status: 2 for unknown ids or non-riding roles, 1 otherwise
pub fn exit_code(err: &Error) -> i32 {
    if err.is_contract_violation() {
        2
    } else {
        1
    }
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let verbosity = if cli.verbose {
        Verbosity::Verbose
    } else {
        config.verbosity
    };
    init_logging(verbosity);

    let output_format = cli.format.unwrap_or(config.output_format);
    let roster_path = cli.roster.as_deref();

    match &cli.command {
        Commands::Roster => cmd_roster(&config, roster_path, output_format),

        Commands::Assign {
            placements,
            auto,
            unassign,
            publish,
            export,
        } => cmd_assign(
            &config,
            roster_path,
            output_format,
            placements,
            *auto,
            unassign,
            *publish,
            export.as_deref(),
        ),

        Commands::Auto { publish, export } => cmd_assign(
            &config,
            roster_path,
            output_format,
            &[],
            true,
            &[],
            *publish,
            export.as_deref(),
        ),

        Commands::Config {
            show,
            set_roster,
            clear_roster,
            set_output,
            set_verbosity,
            reset,
        } => cmd_config(
            *show,
            set_roster.clone(),
            *clear_roster,
            *set_output,
            *set_verbosity,
            *reset,
        ),
    }
}

fn open_session(config: &Config, roster_path: Option<&Path>) -> Result<CliSession> {
    let roster = load_roster(config, roster_path)?;
    debug!(
        people = roster.people.len(),
        vehicles = roster.vehicles.len(),
        "starting assignment session"
    );
    Ok(AssignmentSession::from_roster(
        roster,
        TracingSink::new(RecordingSink::new()),
    ))
}

fn cmd_roster(
    config: &Config,
    roster_path: Option<&Path>,
    output_format: OutputFormat,
) -> Result<()> {
    let roster = load_roster(config, roster_path)?;
    output_roster(output_format, &roster.people, &roster.vehicles)
}

#[allow(clippy::too_many_arguments)]
fn cmd_assign(
    config: &Config,
    roster_path: Option<&Path>,
    output_format: OutputFormat,
    placements: &[Placement],
    auto: bool,
    unassign: &[Placement],
    publish: bool,
    export: Option<&Path>,
) -> Result<()> {
    let mut session = open_session(config, roster_path)?;

    if auto {
        session.auto_assign();
    }
    for placement in unassign {
        session.unassign(&placement.person, &placement.vehicle)?;
    }
    for placement in placements {
        session.assign(&placement.person, &placement.vehicle)?;
    }

    let dispatch = if publish { Some(session.publish()) } else { None };

    if let Some(path) = export {
        export_assignments(path, &session)?;
    }

    let summary = session.summary();
    let notices = session.into_sink().into_inner().drain();

    output_session(
        output_format,
        &SessionView {
            notices: &notices,
            summary: &summary,
            dispatch: dispatch.as_deref(),
        },
    )
}

fn export_assignments(path: &Path, session: &CliSession) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        export_assignment_csv(path, session.assignments(), session.vehicles())?;
    } else {
        export_snapshot(path, session.assignments())?;
    }
    eprintln!("Exported assignments to {}", path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_roster: Option<PathBuf>,
    clear_roster: bool,
    set_output: Option<OutputFormat>,
    set_verbosity: Option<Verbosity>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(path) = set_roster {
        config.roster_path = Some(path);
        changed = true;
    }
    if clear_roster {
        config.roster_path = None;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(verbosity) = set_verbosity {
        config.verbosity = verbosity;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fireops_domain::model::{PersonId, VehicleId};

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&Error::UnknownVehicle("99".to_string())), 2);
        assert_eq!(exit_code(&Error::FileNotFound("roster.toml".to_string())), 1);
    }

    #[test]
    fn test_unknown_vehicle_placement_exits_with_contract_code() {
        let config = Config::default();
        let placement = Placement {
            person: PersonId::from("2"),
            vehicle: VehicleId::from("99"),
        };
        let err = cmd_assign(
            &config,
            None,
            OutputFormat::Json,
            &[placement],
            false,
            &[],
            false,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownVehicle(_)));
        assert_eq!(exit_code(&err), 2);
    }
}
