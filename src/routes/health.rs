//! Health endpoint.
//!
//! Reports process uptime, crate version, deployment environment and, on
//! Linux, resident/virtual memory read from `/proc/self/statm`.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::state::AppState;

const STATM_PATH: &str = "/proc/self/statm";
const PAGE_SIZE: u64 = 4096;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    /// Seconds since startup.
    pub uptime: f64,
    pub memory: Option<MemoryUsage>,
    pub environment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    pub rss_bytes: u64,
    pub virtual_bytes: u64,
}

#[derive(Debug, Serialize)]
struct HealthFailure {
    status: &'static str,
    message: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl IntoResponse for HealthError {
    fn into_response(self) -> Response {
        let body = HealthFailure { status: "error", message: "Health check failed" };
        (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
    }
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthReport>, HealthError> {
    let memory = match tokio::fs::read_to_string(STATM_PATH).await {
        Ok(statm) => parse_statm(&statm),
        Err(_) => None,
    };
    match build_report(&state, OffsetDateTime::now_utc(), memory) {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            tracing::error!(error = %e, "health: report failed");
            Err(e)
        }
    }
}

/// Assemble the report for a given wall-clock time.
///
/// # Errors
///
/// Returns [`HealthError`] if the timestamp cannot be formatted.
pub fn build_report(
    state: &AppState,
    now: OffsetDateTime,
    memory: Option<MemoryUsage>,
) -> Result<HealthReport, HealthError> {
    Ok(HealthReport {
        status: "ok",
        timestamp: now.format(&Rfc3339)?,
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.uptime_secs(),
        memory,
        environment: state.config.environment.clone(),
    })
}

/// Parse the first two fields of `statm` (total and resident pages).
#[must_use]
pub fn parse_statm(statm: &str) -> Option<MemoryUsage> {
    let mut fields = statm.split_whitespace().map(str::parse::<u64>);
    let virtual_pages = fields.next()?.ok()?;
    let resident_pages = fields.next()?.ok()?;
    Some(MemoryUsage {
        rss_bytes: resident_pages * PAGE_SIZE,
        virtual_bytes: virtual_pages * PAGE_SIZE,
    })
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
