//! Error types for fireops

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Roster file errors
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to parse roster: {0}")]
    Parse(String),

    #[error("Duplicate person id in roster: {0}")]
    DuplicatePerson(String),

    #[error("Duplicate vehicle id in roster: {0}")]
    DuplicateVehicle(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(String),

    #[error("{name} ({role}) cannot be assigned to a vehicle crew")]
    NotAssignable { name: String, role: String },
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Roster(RosterError::Parse(err.to_string()))
    }
}

impl Error {
    /// True when the error is a caller passing an id or person the allocator cannot use
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::UnknownPerson(_) | Error::UnknownVehicle(_) | Error::NotAssignable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
