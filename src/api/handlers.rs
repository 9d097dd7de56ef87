//! HTTP request handlers for the leave reconciliation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::models::ValidationReport;
use crate::normalize::{
    normalize_hr_accounts, normalize_hr_people, normalize_wfm_accounts, normalize_wfm_people,
};
use crate::reconcile::build_report;

use super::request::ValidationRequest;
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .with_state(state)
}

/// Handler for POST /validate endpoint.
///
/// Accepts the raw source row collections and returns the validation
/// report.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

    // Perform the validation pass
    let start_time = Instant::now();
    let report = perform_validation(&request, state.config(), as_of);
    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        hr_rows = request.hr_accounts.len(),
        wfm_rows = request.wfm_accounts.len(),
        output_rows = report.summary.total_rows,
        balance_mismatches = report.summary.balance_mismatches,
        accrual_mismatches = report.summary.accrual_mismatches,
        mapping_percentage = report.summary.mapping.percentage(),
        duration_us = duration.as_micros(),
        "Validation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Runs the full pipeline over one request: normalize all four row
/// collections, then reconcile and build the report.
fn perform_validation(
    request: &ValidationRequest,
    config: &ConfigLoader,
    as_of: NaiveDate,
) -> ValidationReport {
    let hr_people = normalize_hr_people(&request.hr_people);
    let wfm_people = normalize_wfm_people(&request.wfm_people);

    let hr = normalize_hr_accounts(&request.hr_accounts, &hr_people);
    let (wfm, mapping) = normalize_wfm_accounts(
        &request.wfm_accounts,
        &wfm_people,
        config.catalog(),
        config.aliases(),
    );

    build_report(&hr, &wfm, config.rules(), as_of, mapping)
}
