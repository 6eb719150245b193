//! Telemetry 指标快照。
//!
//! - GET /metrics

use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meter_telemetry::metrics;

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            fetch_success: snapshot.fetch_success,
            fetch_failure: snapshot.fetch_failure,
            tree_builds: snapshot.tree_builds,
            refreshes: snapshot.refreshes,
            build_latency_ms_total: snapshot.build_latency_ms_total,
            build_latency_ms_count: snapshot.build_latency_ms_count,
        })),
    )
        .into_response()
}
