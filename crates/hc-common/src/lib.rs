pub mod db;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod run_id;
pub mod store;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Commonly used data models for the matching engine.

/// Structured requirements attached to a job, parsed from the
/// `requirements_json` column. Every field is optional input: absent
/// requirements degrade to neutral scoring defaults instead of errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub seniority: Option<String>,
    #[serde(default)]
    pub must_have_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub location_preference: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub company_name: String,
    pub job_title: String,
    pub job_level: Option<String>,
    pub remote_ok: Option<bool>,
    pub requirements: Option<JobRequirements>,
}

impl Job {
    /// Target seniority for scoring: the explicit job level wins, falling
    /// back to the seniority named in the structured requirements.
    pub fn seniority_target(&self) -> Option<&str> {
        self.job_level
            .as_deref()
            .filter(|level| !level.trim().is_empty())
            .or_else(|| self.requirements.as_ref().and_then(|r| r.seniority.as_deref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub full_name: String,
    pub current_job_title: Option<String>,
    pub current_company: Option<String>,
    pub industry: Option<String>,
    pub seniority: Option<String>,
    pub country: Option<String>,
}

/// One past role of a candidate. Callers pass these to the scorer ordered
/// most recent first; the scorer treats them as unordered evidence except
/// where the freshest location is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub candidate_id: String,
    pub company_name: Option<String>,
    pub role_title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub description: Option<String>,
}
