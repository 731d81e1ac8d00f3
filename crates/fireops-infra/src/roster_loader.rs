//! Station roster loader from TOML

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use fireops_domain::model::{Person, PersonId, Vehicle, VehicleId};
use fireops_types::{Error, Result, RosterError};

/// Container for parsing roster.toml
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    people: Vec<Person>,
    #[serde(default)]
    vehicles: Vec<Vehicle>,
}

/// People and vehicles of one station, kept in file order
#[derive(Debug, Clone, Default)]
pub struct RosterLoader {
    people: Vec<Person>,
    vehicles: Vec<Vehicle>,
}

impl RosterLoader {
    /// Build a roster from already-constructed records, rejecting duplicate ids
    pub fn from_parts(people: Vec<Person>, vehicles: Vec<Vehicle>) -> Result<Self> {
        let mut person_ids: HashSet<PersonId> = HashSet::new();
        for person in &people {
            if !person_ids.insert(person.id.clone()) {
                return Err(RosterError::DuplicatePerson(person.id.to_string()).into());
            }
        }
        let mut vehicle_ids: HashSet<VehicleId> = HashSet::new();
        for vehicle in &vehicles {
            if !vehicle_ids.insert(vehicle.id.clone()) {
                return Err(RosterError::DuplicateVehicle(vehicle.id.to_string()).into());
            }
        }
        Ok(Self::from_trusted(people, vehicles))
    }

    /// Skip id validation for rosters known to be consistent
    pub(crate) fn from_trusted(people: Vec<Person>, vehicles: Vec<Vehicle>) -> Self {
        Self { people, vehicles }
    }

    /// Load a roster from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let loader = Self::load_from_str(&content)?;
        debug!(
            path = %path.display(),
            people = loader.people.len(),
            vehicles = loader.vehicles.len(),
            "loaded roster file"
        );
        Ok(loader)
    }

    /// Load a roster from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: RosterFile = toml::from_str(toml_content)?;
        Self::from_parts(file.people, file.vehicles)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }
}
