//! Staffing summary and plain-text report

use serde::{Deserialize, Serialize};

use crate::model::{AssignmentMap, Person, Staffing, Vehicle};

/// One vehicle with its derived staffing and current crew
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleStaffing {
    pub vehicle: Vehicle,
    pub staffing: Staffing,
    pub crew: Vec<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingSummary {
    /// Vehicles in roster order
    pub vehicles: Vec<VehicleStaffing>,
    /// Drivers and firefighters not riding any vehicle
    pub unassigned: Vec<Person>,
}

impl StaffingSummary {
    pub fn count(&self, staffing: Staffing) -> usize {
        self.vehicles.iter().filter(|v| v.staffing == staffing).count()
    }

    pub fn assigned_count(&self) -> usize {
        self.vehicles.iter().map(|v| v.crew.len()).sum()
    }
}

pub fn summarize(map: &AssignmentMap, people: &[Person], vehicles: &[Vehicle]) -> StaffingSummary {
    let vehicles = vehicles
        .iter()
        .map(|vehicle| VehicleStaffing {
            vehicle: vehicle.clone(),
            staffing: map.staffing(&vehicle.id),
            crew: map.crew(&vehicle.id).to_vec(),
        })
        .collect();
    let unassigned = people
        .iter()
        .filter(|p| p.role.is_assignable() && !map.is_assigned(&p.id))
        .cloned()
        .collect();
    StaffingSummary {
        vehicles,
        unassigned,
    }
}

pub fn generate_staffing_report(summary: &StaffingSummary) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                 Crew Staffing Report              \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Vehicles:            {}\n", summary.vehicles.len()));
    report.push_str(&format!("  Fully crewed:        {}\n", summary.count(Staffing::Full)));
    report.push_str(&format!("  Partially crewed:    {}\n", summary.count(Staffing::Partial)));
    report.push_str(&format!("  Vacant:              {}\n", summary.count(Staffing::Vacant)));
    report.push_str(&format!("  Assigned personnel:  {}\n", summary.assigned_count()));
    report.push_str(&format!("  Unassigned:          {}\n", summary.unassigned.len()));
    report.push('\n');

    report.push_str("[Vehicles]\n");
    report.push_str("-".repeat(60).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<8} {:<12} {:<16} {:<8} {}\n",
        "Number", "Kind", "Status", "Crew", "Members"
    ));
    report.push_str("-".repeat(60).as_str());
    report.push('\n');
    for entry in &summary.vehicles {
        let members = entry
            .crew
            .iter()
            .map(|p| format!("{} ({})", p.name, p.role))
            .collect::<Vec<_>>()
            .join(", ");
        report.push_str(&format!(
            "{:<8} {:<12} {:<16} {:<8} {}\n",
            entry.vehicle.number,
            entry.vehicle.kind.label(),
            entry.vehicle.status.label(),
            entry.staffing.label(),
            if members.is_empty() { "-" } else { members.as_str() }
        ));
    }
    report.push('\n');

    if summary.unassigned.is_empty() {
        report.push_str("[All drivers and firefighters are assigned]\n\n");
    } else {
        report.push_str("[Unassigned Personnel]\n");
        for person in &summary.unassigned {
            report.push_str(&format!("  {:<6} {:<32} {}\n", person.id, person.name, person.role));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}
