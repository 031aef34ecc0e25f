//! Axum route handlers for the Tailoring API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::sample::{blank_profile, sample_profile};
use crate::state::AppState;
use crate::tailoring::profile_filter::{filter_profile, FilterResult};
use crate::tailoring::relevance::JobDescription;
use crate::tailoring::report::{build_relevance_report, RelevanceReport};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub profile: Profile,
    /// `null` or absent is the same as empty: manual selection mode.
    #[serde(default)]
    pub job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile/sample
pub async fn handle_sample_profile() -> Json<Profile> {
    Json(sample_profile())
}

/// GET /api/v1/profile/blank
pub async fn handle_blank_profile() -> Json<Profile> {
    Json(blank_profile())
}

/// POST /api/v1/profile/filter
///
/// Tailors the profile to the job description. Called on every editor change,
/// so a blank JD is not an error: it returns the profile untouched.
pub async fn handle_filter(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Json<FilterResult> {
    Json(filter_profile(
        &request.profile,
        request.job_description.as_deref(),
        &state.limits,
        state.scorer.as_ref(),
    ))
}

/// POST /api/v1/profile/relevance
///
/// Per-bullet scores explaining the filter's choices. Requires a JD.
pub async fn handle_relevance(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<RelevanceReport>, AppError> {
    let jd = JobDescription::parse(request.job_description.as_deref()).ok_or_else(|| {
        AppError::Validation("job_description cannot be empty".to_string())
    })?;

    Ok(Json(build_relevance_report(
        &request.profile,
        &jd,
        &state.limits,
        state.scorer.as_ref(),
    )))
}
