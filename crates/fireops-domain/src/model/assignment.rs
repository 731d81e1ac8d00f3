//! Assignment map: vehicle id to its ordered crew

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::person::{Person, PersonId, Role};
use super::vehicle::VehicleId;

/// How fully a vehicle is crewed, derived from its current occupants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Staffing {
    Vacant,
    Partial,
    Full,
}

impl Staffing {
    pub fn label(self) -> &'static str {
        match self {
            Staffing::Vacant => "vacant",
            Staffing::Partial => "partial",
            Staffing::Full => "full",
        }
    }
}

/// Crews keyed by vehicle, each crew kept in assignment order.
///
/// Only the allocator service mutates the map, so every reachable value keeps
/// a person on at most one vehicle and within the per-role seat counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssignmentMap {
    crews: BTreeMap<VehicleId, Vec<Person>>,
}

impl AssignmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.crews.is_empty()
    }

    /// Crew of a vehicle in assignment order (empty when nobody is assigned)
    pub fn crew(&self, vehicle: &VehicleId) -> &[Person] {
        self.crews.get(vehicle).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vehicle the person currently rides, if any
    pub fn vehicle_of(&self, person: &PersonId) -> Option<&VehicleId> {
        self.crews
            .iter()
            .find(|(_, crew)| crew.iter().any(|p| &p.id == person))
            .map(|(vehicle, _)| vehicle)
    }

    pub fn is_assigned(&self, person: &PersonId) -> bool {
        self.vehicle_of(person).is_some()
    }

    pub fn role_count(&self, vehicle: &VehicleId, role: Role) -> usize {
        self.crew(vehicle).iter().filter(|p| p.role == role).count()
    }

    pub fn staffing(&self, vehicle: &VehicleId) -> Staffing {
        if self.crew(vehicle).is_empty() {
            return Staffing::Vacant;
        }
        let seats_taken = [Role::Driver, Role::Firefighter].iter().all(|role| {
            role.seats_per_vehicle()
                .is_some_and(|seats| self.role_count(vehicle, *role) >= seats)
        });
        if seats_taken {
            Staffing::Full
        } else {
            Staffing::Partial
        }
    }

    /// Total number of assigned people across all vehicles
    pub fn assigned_count(&self) -> usize {
        self.crews.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VehicleId, &[Person])> {
        self.crews.iter().map(|(vehicle, crew)| (vehicle, crew.as_slice()))
    }

    pub(crate) fn push(&mut self, vehicle: VehicleId, person: Person) {
        self.crews.entry(vehicle).or_default().push(person);
    }

    /// Remove a person from a vehicle, dropping the crew entry once it is empty
    pub(crate) fn remove(&mut self, vehicle: &VehicleId, person: &PersonId) -> bool {
        let Some(crew) = self.crews.get_mut(vehicle) else {
            return false;
        };
        let before = crew.len();
        crew.retain(|p| &p.id != person);
        let removed = crew.len() != before;
        if crew.is_empty() {
            self.crews.remove(vehicle);
        }
        removed
    }
}
