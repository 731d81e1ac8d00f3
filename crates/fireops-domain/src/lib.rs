//! Domain layer - personnel and vehicle models, crew allocation, repository traits

pub mod model;
pub mod notify;
pub mod repository;
pub mod service;
