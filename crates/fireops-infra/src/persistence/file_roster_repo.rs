//! File-based roster repository (TOML)

use std::path::Path;

use fireops_domain::model::{Person, Vehicle};
use fireops_domain::repository::{PeopleDirectory, VehicleRoster};
use fireops_types::Error;

use crate::roster_loader::RosterLoader;

pub struct FileRosterRepository {
    loader: RosterLoader,
}

impl FileRosterRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: &Path) -> Result<Self, Error> {
        let loader = RosterLoader::load_from_file(toml_path)?;
        Ok(Self { loader })
    }
}

impl PeopleDirectory for FileRosterRepository {
    fn find_all_people(&self) -> Result<Vec<Person>, Error> {
        Ok(self.loader.people().to_vec())
    }
}

impl VehicleRoster for FileRosterRepository {
    fn find_all_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        Ok(self.loader.vehicles().to_vec())
    }
}
