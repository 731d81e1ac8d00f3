//! Application service layer - assignment session, dispatch, config, logging

pub mod config;
pub mod dispatch;
pub mod feedback;
pub mod logging;
pub mod repository;
pub mod session;

pub use config::Config;
pub use session::AssignmentSession;
