//! Built-in station roster used when no roster file is configured

use fireops_domain::model::{Person, Role, Vehicle, VehicleKind, VehicleStatus};

use crate::roster_loader::RosterLoader;

pub fn station_people() -> Vec<Person> {
    vec![
        Person::new("1", "Ahmed Mohammed Ali", Role::Manager).with_contact(
            "manager1",
            "ahmed@fire.gov",
            "+966501234567",
        ),
        Person::new("2", "Mohammed Abdullah Al-Saad", Role::Driver).with_contact(
            "driver1",
            "mohammed@fire.gov",
            "+966501234568",
        ),
        Person::new("3", "Khalid Ahmed Al-Zahrani", Role::Firefighter).with_contact(
            "firefighter1",
            "khalid@fire.gov",
            "+966501234569",
        ),
        Person::new("4", "Abdulrahman Mohammed Al-Qahtani", Role::Firefighter).with_contact(
            "firefighter2",
            "abdulrahman@fire.gov",
            "+966501234570",
        ),
        Person::new("5", "Saad Abdulaziz Al-Mutairi", Role::Guard).with_contact(
            "guard1",
            "saad@fire.gov",
            "+966501234571",
        ),
        Person::new("6", "Fahd Salem Al-Ghamdi", Role::Driver).with_contact(
            "driver2",
            "fahd@fire.gov",
            "+966501234572",
        ),
        Person::new("7", "Nasser Abdullah Al-Harbi", Role::Firefighter).with_contact(
            "firefighter3",
            "nasser@fire.gov",
            "+966501234573",
        ),
    ]
}

pub fn station_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new("1", "001", VehicleStatus::Active).with_kind(VehicleKind::FireTruck),
        Vehicle::new("2", "002", VehicleStatus::Active).with_kind(VehicleKind::FireTruck),
        Vehicle::new("3", "003", VehicleStatus::Maintenance).with_kind(VehicleKind::Ambulance),
        Vehicle::new("4", "004", VehicleStatus::Active).with_kind(VehicleKind::Rescue),
    ]
}

/// Station roster as a loader, same shape as one read from a file
pub fn station_roster() -> RosterLoader {
    RosterLoader::from_trusted(station_people(), station_vehicles())
}
