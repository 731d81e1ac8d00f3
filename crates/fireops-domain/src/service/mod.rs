//! Domain services

pub mod allocator;
pub mod staffing_report;

pub use allocator::{auto_assign, check_placement, Allocator, AssignOutcome, RejectReason};
pub use staffing_report::{generate_staffing_report, summarize, StaffingSummary, VehicleStaffing};
