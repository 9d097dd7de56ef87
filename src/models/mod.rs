//! Core data models for the leave reconciliation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod absence;
mod employee;
mod validation_row;

pub use absence::{AbsenceId, HrAbsence, JoinedRow, WfmAbsence};
pub use employee::EmployeeRecord;
pub use validation_row::{MappingSummary, ValidationReport, ValidationRow, ValidationSummary};
