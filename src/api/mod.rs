//! HTTP API module for the leave reconciliation engine.
//!
//! This module provides the REST endpoint for running a validation pass
//! over raw source rows.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ValidationRequest;
pub use response::ApiError;
pub use state::AppState;
