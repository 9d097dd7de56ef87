//! Leave Balance Reconciliation Engine
//!
//! This crate reconciles employee leave-balance records between an HR master
//! system (spreadsheet-exported) and a workforce-management (WFM) system
//! (REST-backed), producing one validation row per employee and absence type
//! that flags balance and accrual mismatches against a declarative rule set.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod mapping;
pub mod models;
pub mod normalize;
pub mod reconcile;
