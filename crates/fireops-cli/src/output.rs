//! Output formatting module

use serde::Serialize;

use fireops_app::dispatch::DispatchNotice;
use fireops_domain::model::{Person, Vehicle};
use fireops_domain::notify::Notice;
use fireops_domain::service::{generate_staffing_report, StaffingSummary};
use fireops_types::{OutputFormat, Result};

/// Everything a session run shows to the user
#[derive(Serialize)]
pub struct SessionView<'a> {
    pub notices: &'a [Notice],
    pub summary: &'a StaffingSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch: Option<&'a [DispatchNotice]>,
}

#[derive(Serialize)]
struct RosterView<'a> {
    people: &'a [Person],
    vehicles: &'a [Vehicle],
}

pub fn output_session(output_format: OutputFormat, view: &SessionView<'_>) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    if !view.notices.is_empty() {
        println!("\nActions");
        println!("=======");
        for notice in view.notices {
            match notice.reason {
                Some(reason) => println!(
                    "[{:<5}] {} ({})",
                    notice.level.label(),
                    notice.message,
                    reason
                ),
                None => println!("[{:<5}] {}", notice.level.label(), notice.message),
            }
        }
        println!();
    }

    print!("{}", generate_staffing_report(view.summary));

    if let Some(dispatch) = view.dispatch {
        println!("\nDispatch Notices");
        println!("================");
        if dispatch.is_empty() {
            println!("(nobody is assigned)");
        }
        for notice in dispatch {
            println!(
                "{}  {}",
                notice.created_at.format("%Y-%m-%d %H:%M"),
                notice.message
            );
        }
    }

    Ok(())
}

pub fn output_roster(
    output_format: OutputFormat,
    people: &[Person],
    vehicles: &[Vehicle],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let view = RosterView { people, vehicles };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("\nPersonnel");
    println!("=========");
    println!("{:<6} {:<32} {:<12} {}", "ID", "Name", "Role", "Phone");
    for person in people {
        println!(
            "{:<6} {:<32} {:<12} {}",
            person.id, person.name, person.role, person.phone
        );
    }

    println!("\nVehicles");
    println!("========");
    println!("{:<6} {:<8} {:<12} {}", "ID", "Number", "Kind", "Status");
    for vehicle in vehicles {
        println!(
            "{:<6} {:<8} {:<12} {}",
            vehicle.id,
            vehicle.number,
            vehicle.kind.label(),
            vehicle.status
        );
    }

    Ok(())
}
