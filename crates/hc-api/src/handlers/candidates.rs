use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};

use hc_common::db::{insert_candidate, insert_experience};
use hc_common::{run_id, Candidate, Experience};

use crate::error::ApiError;
use crate::SharedState;

#[derive(Debug, Deserialize)]
pub struct ExperienceInput {
    pub company_name: Option<String>,
    pub role_title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCandidateRequest {
    pub full_name: String,
    pub current_job_title: Option<String>,
    pub current_company: Option<String>,
    pub industry: Option<String>,
    pub seniority: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub experiences: Vec<ExperienceInput>,
    /// When set, a candidate-vs-all-jobs matching run is spawned in the
    /// background after the insert.
    #[serde(default)]
    pub trigger_matching: bool,
}

pub async fn create_candidate(
    State(state): State<SharedState>,
    Json(request): Json<CreateCandidateRequest>,
) -> Result<Json<Candidate>, ApiError> {
    if request.full_name.trim().is_empty() {
        return Err(ApiError::BadRequest("full_name is required".into()));
    }

    let candidate = Candidate {
        id: run_id::generate(),
        full_name: request.full_name,
        current_job_title: request.current_job_title,
        current_company: request.current_company,
        industry: request.industry,
        seniority: request.seniority,
        country: request.country,
    };

    insert_candidate(&state.pool, &candidate).await?;

    for input in request.experiences {
        let experience = Experience {
            id: run_id::generate(),
            candidate_id: candidate.id.clone(),
            company_name: input.company_name,
            role_title: input.role_title,
            start_date: input.start_date,
            end_date: input.end_date,
            location: input.location,
            description: input.description,
        };
        insert_experience(&state.pool, &experience).await?;
    }

    info!(candidate_id = %candidate.id, "candidate created");

    if request.trigger_matching {
        spawn_candidate_matching(state, candidate.id.clone());
    }

    Ok(Json(candidate))
}

fn spawn_candidate_matching(state: SharedState, candidate_id: String) {
    tokio::spawn(async move {
        match state
            .orchestrator
            .match_candidate_with_all_jobs(&candidate_id)
            .await
        {
            Ok(count) => {
                info!(candidate_id = %candidate_id, matched = count, "background matching finished")
            }
            Err(err) => {
                error!(candidate_id = %candidate_id, error = %err, "background matching failed")
            }
        }
    });
}
