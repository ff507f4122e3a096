//! Route handler functions for the skill endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::envelope::{respond, RequestEnvelope, ResponseEnvelope};
use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub dataset_records: usize,
    pub sites: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /health - liveness plus a summary of what the skill has loaded.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        dataset_records: state.dataset_records,
        sites: state.site_count,
    })
}

/// POST /skill - one platform request envelope in, one response envelope out.
///
/// The body is parsed by hand so a malformed envelope gets the same JSON
/// error body as every other failure.
pub async fn skill(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let envelope: RequestEnvelope = serde_json::from_slice(&body)?;

    let application_id = envelope.application_id();
    if !state.accepts_application(application_id) {
        warn!(
            application_id = application_id.unwrap_or(""),
            "Rejected envelope for another application"
        );
        return Err(ApiError::Forbidden(format!(
            "Application {} is not served here",
            application_id.unwrap_or("<none>")
        )));
    }

    debug!(
        request_id = %envelope.request.request_id,
        request_type = %envelope.request.request_type,
        "Skill request received"
    );
    Ok(Json(respond(&state.skill, &envelope)))
}
