//! Roster source selection

use std::path::Path;

use fireops_domain::model::{Person, Vehicle};
use fireops_domain::repository::{PeopleDirectory, VehicleRoster};
use fireops_infra::persistence::{FileRosterRepository, StationRosterRepository};
use fireops_types::Result;
use tracing::info;

use crate::config::Config;

/// People and vehicles snapshot handed to a session
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub people: Vec<Person>,
    pub vehicles: Vec<Vehicle>,
}

pub fn read_roster<R: PeopleDirectory + VehicleRoster>(repo: &R) -> Result<Roster> {
    Ok(Roster {
        people: repo.find_all_people()?,
        vehicles: repo.find_all_vehicles()?,
    })
}

/// Load the roster from `override_path`, else the configured file, else the built-in station
pub fn load_roster(config: &Config, override_path: Option<&Path>) -> Result<Roster> {
    match override_path.or(config.roster_path.as_deref()) {
        Some(path) => {
            info!(path = %path.display(), "using roster file");
            read_roster(&FileRosterRepository::new(path)?)
        }
        None => {
            info!("using built-in station roster");
            read_roster(&StationRosterRepository::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fireops_types::Error;

    #[test]
    fn test_builtin_when_unconfigured() {
        let roster = load_roster(&Config::default(), None).unwrap();
        assert_eq!(roster.people.len(), 7);
        assert_eq!(roster.vehicles.len(), 4);
    }

    #[test]
    fn test_override_beats_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(
            &path,
            "[[vehicles]]\nid = \"9\"\nnumber = \"009\"\nstatus = \"active\"\n",
        )
        .unwrap();
        let config = Config {
            roster_path: Some(dir.path().join("missing.toml")),
            ..Config::default()
        };

        let roster = load_roster(&config, Some(&path)).unwrap();
        assert!(roster.people.is_empty());
        assert_eq!(roster.vehicles[0].number, "009");

        let err = load_roster(&config, None).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
