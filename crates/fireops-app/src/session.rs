//! Assignment session - owns the assignment map for one planning session
//!
//! The session is the only place that turns allocator outcomes into notices.
//! The map starts empty and is dropped with the session; it is never saved.

use serde::Serialize;
use tracing::{debug, info};

use fireops_domain::model::{AssignmentMap, Person, PersonId, Role, Staffing, Vehicle, VehicleId};
use fireops_domain::notify::{Notice, NotificationSink};
use fireops_domain::service::{summarize, Allocator, AssignOutcome, StaffingSummary};
use fireops_types::Result;

use crate::dispatch::{self, DispatchNotice};
use crate::repository::Roster;

/// Assignable person together with whether they already ride a vehicle
#[derive(Debug, Clone, Serialize)]
pub struct AvailablePerson {
    pub person: Person,
    pub assigned_to: Option<VehicleId>,
}

pub struct AssignmentSession<S: NotificationSink> {
    people: Vec<Person>,
    vehicles: Vec<Vehicle>,
    assignments: AssignmentMap,
    sink: S,
}

impl<S: NotificationSink> AssignmentSession<S> {
    pub fn new(people: Vec<Person>, vehicles: Vec<Vehicle>, sink: S) -> Self {
        Self {
            people,
            vehicles,
            assignments: AssignmentMap::new(),
            sink,
        }
    }

    pub fn from_roster(roster: Roster, sink: S) -> Self {
        Self::new(roster.people, roster.vehicles, sink)
    }

    fn allocator(&self) -> Allocator<'_> {
        Allocator::new(&self.people, &self.vehicles)
    }

    /// Place a person on a vehicle and report the outcome to the sink
    pub fn assign(
        &mut self,
        person_id: &PersonId,
        vehicle_id: &VehicleId,
    ) -> Result<AssignOutcome> {
        let (next, outcome) = self
            .allocator()
            .assign(&self.assignments, person_id, vehicle_id)?;
        self.assignments = next;

        match outcome.reason() {
            None => info!(person = %person_id, vehicle = %vehicle_id, "assigned"),
            Some(reason) => debug!(
                person = %person_id,
                vehicle = %vehicle_id,
                reason = reason.code(),
                "assignment refused"
            ),
        }
        self.sink.notify(Notice::from_outcome(&outcome));
        Ok(outcome)
    }

    /// Take a person off a vehicle; silent when they were not on it
    pub fn unassign(&mut self, person_id: &PersonId, vehicle_id: &VehicleId) -> Result<bool> {
        let (next, removed) = self
            .allocator()
            .unassign(&self.assignments, person_id, vehicle_id)?;
        self.assignments = next;
        if removed {
            info!(person = %person_id, vehicle = %vehicle_id, "unassigned");
        }
        Ok(removed)
    }

    /// Replace every assignment with a fresh greedy allocation
    pub fn auto_assign(&mut self) -> &AssignmentMap {
        self.assignments = self.allocator().auto_assign();
        info!(assigned = self.assignments.assigned_count(), "auto-assigned crews");
        self.sink
            .notify(Notice::success("Generated assignments automatically"));
        &self.assignments
    }

    pub fn clear(&mut self) {
        self.assignments = AssignmentMap::new();
        info!("cleared assignments");
        self.sink.notify(Notice::success("Cleared all assignments"));
    }

    /// Build one dispatch notice per assigned person
    pub fn publish(&mut self) -> Vec<DispatchNotice> {
        let notices = dispatch::publish(&self.assignments, &self.vehicles);
        for notice in &notices {
            debug!(person = %notice.person_id, vehicle = %notice.vehicle_number, "dispatch notice");
        }
        info!(count = notices.len(), "published assignment roster");
        self.sink.notify(Notice::success("Assignment roster saved"));
        notices
    }

    pub fn assignments(&self) -> &AssignmentMap {
        &self.assignments
    }

    pub fn crew(&self, vehicle_id: &VehicleId) -> &[Person] {
        self.assignments.crew(vehicle_id)
    }

    pub fn is_assigned(&self, person_id: &PersonId) -> bool {
        self.assignments.is_assigned(person_id)
    }

    pub fn staffing(&self, vehicle_id: &VehicleId) -> Staffing {
        self.assignments.staffing(vehicle_id)
    }

    /// Drivers or firefighters in roster order, flagged with their current vehicle
    pub fn available(&self, role: Role) -> Vec<AvailablePerson> {
        self.allocator()
            .assignable(role)
            .map(|person| AvailablePerson {
                person: person.clone(),
                assigned_to: self.assignments.vehicle_of(&person.id).cloned(),
            })
            .collect()
    }

    pub fn summary(&self) -> StaffingSummary {
        summarize(&self.assignments, &self.people, &self.vehicles)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
