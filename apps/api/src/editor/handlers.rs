//! Axum route handlers for the Editor API.

use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::editor::ops::{apply_edits, ProfileEdit};
use crate::errors::AppError;
use crate::models::profile::Profile;

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub profile: Profile,
    pub edits: Vec<ProfileEdit>,
}

/// POST /api/v1/profile/edit
///
/// Applies the edits in order and returns the new profile. Any bad index
/// rejects the whole batch with 422.
pub async fn handle_edit(Json(request): Json<EditRequest>) -> Result<Json<Profile>, AppError> {
    let count = request.edits.len();
    let profile = apply_edits(&request.profile, request.edits)?;
    debug!(edits = count, "Applied profile edits");
    Ok(Json(profile))
}
