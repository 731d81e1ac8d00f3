//! Repository trait definitions for roster sources

use fireops_types::Error;

use crate::model::{Person, Vehicle};

/// Source of station personnel
pub trait PeopleDirectory {
    /// All people in roster order
    fn find_all_people(&self) -> Result<Vec<Person>, Error>;
}

/// Source of station vehicles
pub trait VehicleRoster {
    /// All vehicles in roster order
    fn find_all_vehicles(&self) -> Result<Vec<Vehicle>, Error>;
}
