//! Workforce domain module (staff with variant bonus policies).

pub mod staff;

pub use staff::{Employee, EmployeeId, Manager, StaffMember};
