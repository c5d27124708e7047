use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use hc_common::db::{fetch_candidate, fetch_job};

use crate::error::ApiError;
use crate::SharedState;

#[derive(Debug, Serialize)]
pub struct RematchResponse {
    /// Pairs scored and persisted. Per-pair failures are in the logs.
    pub succeeded: usize,
}

/// Re-scores one job against every candidate, synchronously.
pub async fn rematch_job(
    State(state): State<SharedState>,
    Path(job_id): Path<String>,
) -> Result<Json<RematchResponse>, ApiError> {
    if fetch_job(&state.pool, &job_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("job not found: {job_id}")));
    }

    let succeeded = state
        .orchestrator
        .match_job_with_all_candidates(&job_id)
        .await?;

    Ok(Json(RematchResponse { succeeded }))
}

/// Re-scores one candidate against every job, synchronously.
pub async fn rematch_candidate(
    State(state): State<SharedState>,
    Path(candidate_id): Path<String>,
) -> Result<Json<RematchResponse>, ApiError> {
    if fetch_candidate(&state.pool, &candidate_id).await?.is_none() {
        return Err(ApiError::NotFound(format!(
            "candidate not found: {candidate_id}"
        )));
    }

    let succeeded = state
        .orchestrator
        .match_candidate_with_all_jobs(&candidate_id)
        .await?;

    Ok(Json(RematchResponse { succeeded }))
}
