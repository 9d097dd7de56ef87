//! Performance benchmarks for the leave reconciliation engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single-row validation request: < 1ms mean
//! - 100-row validation request: < 10ms mean
//! - 1000-row validation request: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use leave_recon::api::{AppState, create_router};
use leave_recon::config::ConfigLoader;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config)
}

/// The absence types cycled through when generating rows.
const ABSENCE_TYPES: [&str; 4] = [
    "Global - Annual Leave",
    "Global - Sick Leave",
    "Global - Me Day",
    "USA - PTO",
];

/// Creates a validation request with the specified number of row pairs.
fn create_request_with_rows(row_count: usize) -> String {
    let hr_accounts: Vec<serde_json::Value> = (0..row_count)
        .map(|i| {
            serde_json::json!({
                "EmployeeId": format!("E{:04}", i),
                "AbsenceType": ABSENCE_TYPES[i % ABSENCE_TYPES.len()],
                "Beginning Year Balance": (i % 30).to_string(),
                "Accrued this year": i % 10
            })
        })
        .collect();

    let wfm_accounts: Vec<serde_json::Value> = (0..row_count)
        .map(|i| {
            serde_json::json!({
                "EmploymentNumber": format!("e{:04}", i),
                "AbsenceName": ABSENCE_TYPES[i % ABSENCE_TYPES.len()],
                "BalanceIn": (i % 30).to_string(),
                "Accrued": i % 10,
                "Extra": 0,
                "ContractName": "Standard",
                "TrackedBy": "Days",
                "StartDate": "2025-01-01"
            })
        })
        .collect();

    let wfm_people: Vec<serde_json::Value> = (0..row_count)
        .map(|i| {
            serde_json::json!({
                "EmploymentNumber": format!("E{:04}", i),
                "PersonId": format!("p-{:04}", i),
                "BusinessUnitName": "Customer Care",
                "EmploymentStartDate": "2020-01-01T00:00:00"
            })
        })
        .collect();

    serde_json::json!({
        "hr_accounts": hr_accounts,
        "wfm_accounts": wfm_accounts,
        "wfm_people": wfm_people,
        "as_of": "2025-08-01"
    })
    .to_string()
}

/// Benchmark: single-row validation request.
///
/// Target: < 1ms mean
fn bench_single_row(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_with_rows(1);

    c.bench_function("single_row", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/validate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: various row counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("scaling");

    for row_count in [10, 100, 1000].iter() {
        let router = create_router(state.clone());
        let body = create_request_with_rows(*row_count);

        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(BenchmarkId::new("rows", row_count), row_count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/validate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }

    group.finish();
}

/// Benchmark: resolution-heavy request where every absence name needs the
/// substring fallback stage.
fn bench_fallback_resolution(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    let wfm_accounts: Vec<serde_json::Value> = (0..100)
        .map(|i| {
            serde_json::json!({
                "EmploymentNumber": format!("e{:04}", i),
                // Partial names force the substring stage.
                "AbsenceName": if i % 2 == 0 { "Annual Leave" } else { "Sick Leave" },
                "BalanceIn": 0,
                "Accrued": 0
            })
        })
        .collect();
    let hr_accounts: Vec<serde_json::Value> = (0..100)
        .map(|i| {
            serde_json::json!({
                "EmployeeId": format!("E{:04}", i),
                "AbsenceType": if i % 2 == 0 { "Annual Leave" } else { "Sick Leave" }
            })
        })
        .collect();
    let wfm_people: Vec<serde_json::Value> = (0..100)
        .map(|i| {
            serde_json::json!({
                "EmploymentNumber": format!("E{:04}", i),
                "PersonId": format!("p-{:04}", i),
                "BusinessUnitName": "care"
            })
        })
        .collect();

    let body = serde_json::json!({
        "hr_accounts": hr_accounts,
        "wfm_accounts": wfm_accounts,
        "wfm_people": wfm_people,
        "as_of": "2025-08-01"
    })
    .to_string();

    let mut group = c.benchmark_group("fallback_resolution");
    group.throughput(Throughput::Elements(100));

    group.bench_function("substring_stage_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/validate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_row,
    bench_scaling,
    bench_fallback_resolution,
);
criterion_main!(benches);
