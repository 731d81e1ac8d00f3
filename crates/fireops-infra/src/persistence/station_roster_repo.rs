//! Repository over the built-in station roster

use fireops_domain::model::{Person, Vehicle};
use fireops_domain::repository::{PeopleDirectory, VehicleRoster};
use fireops_types::Error;

use crate::roster_loader::RosterLoader;
use crate::station_roster::station_roster;

#[derive(Debug, Clone)]
pub struct StationRosterRepository {
    loader: RosterLoader,
}

impl StationRosterRepository {
    pub fn new() -> Self {
        Self {
            loader: station_roster(),
        }
    }
}

impl Default for StationRosterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PeopleDirectory for StationRosterRepository {
    fn find_all_people(&self) -> Result<Vec<Person>, Error> {
        Ok(self.loader.people().to_vec())
    }
}

impl VehicleRoster for StationRosterRepository {
    fn find_all_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        Ok(self.loader.vehicles().to_vec())
    }
}
