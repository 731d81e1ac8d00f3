//! Crew allocation rules
//!
//! All operations are pure: they take the current [`AssignmentMap`] by reference
//! and hand back the next one together with the outcome. Showing feedback is the
//! caller's job (see [`crate::notify`]).

use serde::{Deserialize, Serialize};

use fireops_types::{Error, Result};

use crate::model::{AssignmentMap, Person, PersonId, Role, Vehicle, VehicleId, VehicleStatus};

/// Why a single assignment was refused. The map is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    VehicleUnavailable,
    AlreadyAssignedHere,
    AlreadyAssignedElsewhere,
    DriverSlotFull,
    FirefighterSlotsFull,
}

impl RejectReason {
    pub fn code(self) -> &'static str {
        match self {
            RejectReason::VehicleUnavailable => "VehicleUnavailable",
            RejectReason::AlreadyAssignedHere => "AlreadyAssignedHere",
            RejectReason::AlreadyAssignedElsewhere => "AlreadyAssignedElsewhere",
            RejectReason::DriverSlotFull => "DriverSlotFull",
            RejectReason::FirefighterSlotsFull => "FirefighterSlotsFull",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RejectReason::VehicleUnavailable => "Cannot assign a crew to an out-of-service vehicle",
            RejectReason::AlreadyAssignedHere => "This person is already assigned to this vehicle",
            RejectReason::AlreadyAssignedElsewhere => {
                "This person is already assigned to another vehicle"
            }
            RejectReason::DriverSlotFull => "Each vehicle takes exactly one driver",
            RejectReason::FirefighterSlotsFull => "Each vehicle takes at most two firefighters",
        }
    }

    /// `AlreadyAssignedHere` is informational; every other reason is an error
    pub fn is_error(self) -> bool {
        !matches!(self, RejectReason::AlreadyAssignedHere)
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.code())
    }
}

/// Result of a single `assign` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AssignOutcome {
    Assigned {
        person_name: String,
        vehicle_number: String,
    },
    Rejected {
        reason: RejectReason,
    },
}

impl AssignOutcome {
    pub fn is_assigned(&self) -> bool {
        matches!(self, AssignOutcome::Assigned { .. })
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            AssignOutcome::Assigned { .. } => None,
            AssignOutcome::Rejected { reason } => Some(*reason),
        }
    }
}

/// Check whether `person` may join `vehicle`, rules evaluated in order
pub fn check_placement(
    map: &AssignmentMap,
    person: &Person,
    vehicle: &Vehicle,
) -> std::result::Result<(), RejectReason> {
    if !vehicle.status.accepts_crew() {
        return Err(RejectReason::VehicleUnavailable);
    }

    match map.vehicle_of(&person.id) {
        Some(current) if current == &vehicle.id => return Err(RejectReason::AlreadyAssignedHere),
        Some(_) => return Err(RejectReason::AlreadyAssignedElsewhere),
        None => {}
    }

    let seats_taken = |role: Role| {
        role.seats_per_vehicle()
            .is_some_and(|seats| map.role_count(&vehicle.id, role) >= seats)
    };

    match person.role {
        Role::Driver if seats_taken(Role::Driver) => Err(RejectReason::DriverSlotFull),
        Role::Firefighter if seats_taken(Role::Firefighter) => {
            Err(RejectReason::FirefighterSlotsFull)
        }
        Role::Driver | Role::Firefighter | Role::Manager | Role::Guard => Ok(()),
    }
}

/// Greedy bulk assignment over the active vehicles in roster order.
///
/// Each active vehicle takes the next driver, then up to two next firefighters.
/// Queues keep input order and are never revisited, so the result is fully
/// determined by the order of `people` and `vehicles`.
pub fn auto_assign(people: &[Person], vehicles: &[Vehicle]) -> AssignmentMap {
    let mut queues = [Role::Driver, Role::Firefighter]
        .map(|role| (role, people.iter().filter(move |p| p.role == role)));

    let mut map = AssignmentMap::new();
    for vehicle in vehicles.iter().filter(|v| v.status == VehicleStatus::Active) {
        for (role, queue) in queues.iter_mut() {
            let seats = role.seats_per_vehicle().unwrap_or(0);
            for person in queue.by_ref().take(seats) {
                map.push(vehicle.id.clone(), person.clone());
            }
        }
    }
    map
}

/// Allocation rules bound to a roster snapshot
#[derive(Debug, Clone, Copy)]
pub struct Allocator<'a> {
    people: &'a [Person],
    vehicles: &'a [Vehicle],
}

impl<'a> Allocator<'a> {
    pub fn new(people: &'a [Person], vehicles: &'a [Vehicle]) -> Self {
        Self { people, vehicles }
    }

    pub fn person(&self, id: &PersonId) -> Result<&'a Person> {
        self.people
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| Error::UnknownPerson(id.to_string()))
    }

    pub fn vehicle(&self, id: &VehicleId) -> Result<&'a Vehicle> {
        self.vehicles
            .iter()
            .find(|v| &v.id == id)
            .ok_or_else(|| Error::UnknownVehicle(id.to_string()))
    }

    fn crew_member(&self, id: &PersonId) -> Result<&'a Person> {
        let person = self.person(id)?;
        if !person.role.is_assignable() {
            return Err(Error::NotAssignable {
                name: person.name.clone(),
                role: person.role.to_string(),
            });
        }
        Ok(person)
    }

    /// People of a role that may ride vehicles, in roster order
    pub fn assignable(&self, role: Role) -> impl Iterator<Item = &'a Person> {
        self.people
            .iter()
            .filter(move |p| p.role == role && p.role.is_assignable())
    }

    /// Place one person on one vehicle.
    ///
    /// Unknown ids and non-riding roles are errors; rule failures come back as
    /// [`AssignOutcome::Rejected`] with the map unchanged.
    pub fn assign(
        &self,
        map: &AssignmentMap,
        person_id: &PersonId,
        vehicle_id: &VehicleId,
    ) -> Result<(AssignmentMap, AssignOutcome)> {
        let vehicle = self.vehicle(vehicle_id)?;
        let person = self.crew_member(person_id)?;

        match check_placement(map, person, vehicle) {
            Ok(()) => {
                let mut next = map.clone();
                next.push(vehicle.id.clone(), person.clone());
                let outcome = AssignOutcome::Assigned {
                    person_name: person.name.clone(),
                    vehicle_number: vehicle.number.clone(),
                };
                Ok((next, outcome))
            }
            Err(reason) => Ok((map.clone(), AssignOutcome::Rejected { reason })),
        }
    }

    /// Take a person off a vehicle. Returns whether anything was removed.
    pub fn unassign(
        &self,
        map: &AssignmentMap,
        person_id: &PersonId,
        vehicle_id: &VehicleId,
    ) -> Result<(AssignmentMap, bool)> {
        self.vehicle(vehicle_id)?;
        self.person(person_id)?;

        let mut next = map.clone();
        let removed = next.remove(vehicle_id, person_id);
        Ok((next, removed))
    }

    pub fn auto_assign(&self) -> AssignmentMap {
        auto_assign(self.people, self.vehicles)
    }
}
