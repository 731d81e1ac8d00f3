//! Infrastructure layer - roster loaders, repository implementations, sheet export

pub mod persistence;
pub mod roster_loader;
pub mod sheet_export;
pub mod station_roster;
