//! Personnel type definitions

use serde::{Deserialize, Serialize};

/// Personnel identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Station role. Only drivers and firefighters ride vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Driver,
    Firefighter,
    Guard,
}

impl Role {
    /// Seats of this role on a single vehicle, `None` for roles that never ride
    pub fn seats_per_vehicle(self) -> Option<usize> {
        match self {
            Role::Driver => Some(1),
            Role::Firefighter => Some(2),
            Role::Manager | Role::Guard => None,
        }
    }

    pub fn is_assignable(self) -> bool {
        self.seats_per_vehicle().is_some()
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Driver => "driver",
            Role::Firefighter => "firefighter",
            Role::Guard => "guard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Station personnel record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    /// Login name
    #[serde(default)]
    pub username: String,
    /// Display name
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl Person {
    pub fn new(id: &str, name: &str, role: Role) -> Self {
        Self {
            id: PersonId::from(id),
            username: String::new(),
            name: name.to_string(),
            role,
            email: String::new(),
            phone: String::new(),
        }
    }

    pub fn with_contact(mut self, username: &str, email: &str, phone: &str) -> Self {
        self.username = username.to_string();
        self.email = email.to_string();
        self.phone = phone.to_string();
        self
    }
}
