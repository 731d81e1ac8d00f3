//! Randomized rosters and operation sequences against the allocation rules

use std::collections::HashSet;

use fireops_domain::model::{AssignmentMap, Person, Role, Vehicle, VehicleStatus};
use fireops_domain::service::{auto_assign, Allocator};
use fireops_types::Error;
use proptest::prelude::*;
use proptest::test_runner::{Config, TestCaseError};

#[derive(Debug, Clone)]
enum Step {
    Assign(usize, usize),
    Unassign(usize, usize),
    Auto,
    Clear,
}

fn role() -> impl Strategy<Value = Role> {
    prop_oneof![
        3 => Just(Role::Driver),
        4 => Just(Role::Firefighter),
        1 => Just(Role::Manager),
        1 => Just(Role::Guard),
    ]
}

fn status() -> impl Strategy<Value = VehicleStatus> {
    prop_oneof![
        3 => Just(VehicleStatus::Active),
        1 => Just(VehicleStatus::Maintenance),
        1 => Just(VehicleStatus::OutOfService),
    ]
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (any::<usize>(), any::<usize>()).prop_map(|(p, v)| Step::Assign(p, v)),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(p, v)| Step::Unassign(p, v)),
        1 => Just(Step::Auto),
        1 => Just(Step::Clear),
    ]
}

fn roster(roles: &[Role], statuses: &[VehicleStatus]) -> (Vec<Person>, Vec<Vehicle>) {
    let people = roles
        .iter()
        .enumerate()
        .map(|(i, role)| Person::new(&format!("p{}", i), &format!("Person {}", i), *role))
        .collect();
    let vehicles = statuses
        .iter()
        .enumerate()
        .map(|(i, status)| Vehicle::new(&format!("v{}", i), &format!("{:03}", i + 1), *status))
        .collect();
    (people, vehicles)
}

fn check_invariants(map: &AssignmentMap, vehicles: &[Vehicle]) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for (vehicle_id, crew) in map.iter() {
        let vehicle = vehicles.iter().find(|v| &v.id == vehicle_id);
        prop_assert!(vehicle.is_some(), "crew on unknown vehicle {}", vehicle_id);
        if let Some(vehicle) = vehicle {
            prop_assert_ne!(vehicle.status, VehicleStatus::OutOfService);
        }
        prop_assert!(!crew.is_empty());
        for person in crew {
            prop_assert!(seen.insert(person.id.clone()), "{} rides twice", person.id);
            prop_assert!(person.role.is_assignable());
        }
        prop_assert!(map.role_count(vehicle_id, Role::Driver) <= 1);
        prop_assert!(map.role_count(vehicle_id, Role::Firefighter) <= 2);
    }
    Ok(())
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn random_operations_keep_invariants(
        roles in prop::collection::vec(role(), 1..12),
        statuses in prop::collection::vec(status(), 1..6),
        steps in prop::collection::vec(step(), 0..60)
    ) {
        let (people, vehicles) = roster(&roles, &statuses);
        let alloc = Allocator::new(&people, &vehicles);
        let mut map = AssignmentMap::new();

        for step in steps {
            map = match step {
                Step::Assign(p, v) => {
                    let person = &people[p % people.len()];
                    let vehicle = &vehicles[v % vehicles.len()];
                    match alloc.assign(&map, &person.id, &vehicle.id) {
                        Ok((next, outcome)) if outcome.is_assigned() => {
                            prop_assert_eq!(next.vehicle_of(&person.id), Some(&vehicle.id));
                            next
                        }
                        Ok((next, _)) => {
                            prop_assert_eq!(&next, &map);
                            next
                        }
                        Err(err) => {
                            prop_assert!(matches!(err, Error::NotAssignable { .. }), "expected Error::NotAssignable");
                            prop_assert!(!person.role.is_assignable());
                            map
                        }
                    }
                }
                Step::Unassign(p, v) => {
                    let person = &people[p % people.len()];
                    let vehicle = &vehicles[v % vehicles.len()];
                    let (next, removed) = alloc
                        .unassign(&map, &person.id, &vehicle.id)
                        .map_err(|e| TestCaseError::fail(e.to_string()))?;
                    let was_on = map.crew(&vehicle.id).iter().any(|c| c.id == person.id);
                    prop_assert_eq!(removed, was_on);
                    prop_assert!(!next.crew(&vehicle.id).iter().any(|c| c.id == person.id));
                    next
                }
                Step::Auto => alloc.auto_assign(),
                Step::Clear => AssignmentMap::new(),
            };
            check_invariants(&map, &vehicles)?;
        }
    }

    #[test]
    fn auto_assign_fills_active_vehicles_in_order(
        roles in prop::collection::vec(role(), 0..16),
        statuses in prop::collection::vec(status(), 0..6)
    ) {
        let (people, vehicles) = roster(&roles, &statuses);
        let map = auto_assign(&people, &vehicles);

        prop_assert_eq!(&map, &auto_assign(&people, &vehicles));
        check_invariants(&map, &vehicles)?;

        let active: Vec<&Vehicle> = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Active)
            .collect();
        let drivers: Vec<&Person> = people.iter().filter(|p| p.role == Role::Driver).collect();
        let firefighters: Vec<&Person> =
            people.iter().filter(|p| p.role == Role::Firefighter).collect();

        for vehicle in vehicles.iter().filter(|v| v.status != VehicleStatus::Active) {
            prop_assert!(map.crew(&vehicle.id).is_empty());
        }
        for (i, vehicle) in active.iter().enumerate() {
            prop_assert_eq!(
                map.role_count(&vehicle.id, Role::Driver),
                usize::from(i < drivers.len())
            );
            prop_assert_eq!(
                map.role_count(&vehicle.id, Role::Firefighter),
                firefighters.len().saturating_sub(2 * i).min(2)
            );
        }
        for (i, driver) in drivers.iter().enumerate() {
            prop_assert_eq!(map.is_assigned(&driver.id), i < active.len());
        }
        for (i, firefighter) in firefighters.iter().enumerate() {
            prop_assert_eq!(map.is_assigned(&firefighter.id), i < 2 * active.len());
        }
        for person in people.iter().filter(|p| !p.role.is_assignable()) {
            prop_assert!(!map.is_assigned(&person.id));
        }
    }
}
