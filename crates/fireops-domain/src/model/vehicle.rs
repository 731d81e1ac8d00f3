//! Vehicle roster type definitions

use serde::{Deserialize, Serialize};

/// Vehicle identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl VehicleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    #[default]
    FireTruck,
    Ambulance,
    Rescue,
}

impl VehicleKind {
    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::FireTruck => "fire truck",
            VehicleKind::Ambulance => "ambulance",
            VehicleKind::Rescue => "rescue",
        }
    }
}

/// Operational status of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    OutOfService,
}

impl VehicleStatus {
    /// Whether a crew member may be placed on the vehicle by hand
    pub fn accepts_crew(self) -> bool {
        match self {
            VehicleStatus::Active | VehicleStatus::Maintenance => true,
            VehicleStatus::OutOfService => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::OutOfService => "out of service",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    /// Number painted on the vehicle (e.g., "001")
    pub number: String,
    #[serde(default)]
    pub kind: VehicleKind,
    pub status: VehicleStatus,
}

impl Vehicle {
    pub fn new(id: &str, number: &str, status: VehicleStatus) -> Self {
        Self {
            id: VehicleId::from(id),
            number: number.to_string(),
            kind: VehicleKind::default(),
            status,
        }
    }

    pub fn with_kind(mut self, kind: VehicleKind) -> Self {
        self.kind = kind;
        self
    }
}
