use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use hc_common::db::{fetch_job, fetch_matches_for_job, insert_job, StoredMatch};
use hc_common::{run_id, Job, JobRequirements};

use crate::error::ApiError;
use crate::SharedState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub company_name: String,
    pub job_title: String,
    pub job_level: Option<String>,
    pub remote_ok: Option<bool>,
    pub requirements: Option<JobRequirements>,
    /// When set, a job-vs-all-candidates matching run is spawned in the
    /// background after the insert, as the product does on job creation.
    #[serde(default)]
    pub trigger_matching: bool,
}

pub async fn create_job(
    State(state): State<SharedState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<Job>, ApiError> {
    if request.company_name.trim().is_empty() {
        return Err(ApiError::BadRequest("company_name is required".into()));
    }
    if request.job_title.trim().is_empty() {
        return Err(ApiError::BadRequest("job_title is required".into()));
    }

    let job = Job {
        id: run_id::generate(),
        company_name: request.company_name,
        job_title: request.job_title,
        job_level: request.job_level,
        remote_ok: request.remote_ok,
        requirements: request.requirements,
    };

    insert_job(&state.pool, &job).await?;
    info!(job_id = %job.id, "job created");

    if request.trigger_matching {
        spawn_job_matching(state, job.id.clone());
    }

    Ok(Json(job))
}

/// Fire-and-forget matching run; the outcome lands in the logs, not in the
/// HTTP response.
fn spawn_job_matching(state: SharedState, job_id: String) {
    tokio::spawn(async move {
        match state
            .orchestrator
            .match_job_with_all_candidates(&job_id)
            .await
        {
            Ok(count) => info!(job_id = %job_id, matched = count, "background matching finished"),
            Err(err) => error!(job_id = %job_id, error = %err, "background matching failed"),
        }
    });
}

pub async fn list_job_matches(
    State(state): State<SharedState>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<StoredMatch>>, ApiError> {
    if fetch_job(&state.pool, &job_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("job not found: {job_id}")));
    }

    let matches = fetch_matches_for_job(&state.pool, &job_id).await?;
    Ok(Json(matches))
}
