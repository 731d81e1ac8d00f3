//! Roster repository implementations
//!
//! Both sources implement the domain's `PeopleDirectory` and `VehicleRoster`
//! traits. Neither ever writes; assignment state is never persisted.

mod file_roster_repo;
mod station_roster_repo;

pub use file_roster_repo::FileRosterRepository;
pub use station_roster_repo::StationRosterRepository;
