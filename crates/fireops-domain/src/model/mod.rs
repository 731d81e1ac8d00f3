//! Domain model types

pub mod assignment;
pub mod person;
pub mod vehicle;

pub use assignment::{AssignmentMap, Staffing};
pub use person::{Person, PersonId, Role};
pub use vehicle::{Vehicle, VehicleId, VehicleKind, VehicleStatus};
