//! Dispatch notices and assignment snapshots
//!
//! Publishing the roster tells every assigned person which vehicle they ride.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fireops_domain::model::{AssignmentMap, PersonId, Vehicle, VehicleId};
use fireops_types::Result;

/// Message addressed to one crew member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchNotice {
    pub id: Uuid,
    pub person_id: PersonId,
    pub person_name: String,
    pub vehicle_id: VehicleId,
    pub vehicle_number: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// One notice per assigned person, vehicles in roster order, crews in assignment order
pub fn publish(map: &AssignmentMap, vehicles: &[Vehicle]) -> Vec<DispatchNotice> {
    publish_at(map, vehicles, Utc::now())
}

pub fn publish_at(
    map: &AssignmentMap,
    vehicles: &[Vehicle],
    created_at: DateTime<Utc>,
) -> Vec<DispatchNotice> {
    vehicles
        .iter()
        .flat_map(|vehicle| {
            map.crew(&vehicle.id).iter().map(move |person| DispatchNotice {
                id: Uuid::new_v4(),
                person_id: person.id.clone(),
                person_name: person.name.clone(),
                vehicle_id: vehicle.id.clone(),
                vehicle_number: vehicle.number.clone(),
                message: format!("{}: you are assigned to vehicle {}", person.name, vehicle.number),
                created_at,
            })
        })
        .collect()
}

/// Write the assignment map as pretty JSON
pub fn export_snapshot(path: &Path, map: &AssignmentMap) -> Result<()> {
    let content = serde_json::to_string_pretty(map)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "exported assignment snapshot");
    Ok(())
}
