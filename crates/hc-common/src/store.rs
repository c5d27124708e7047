//! Record-store seam between the matching engine and its persistence
//! backend. The orchestrator only talks to this trait, so tests run against
//! an in-memory implementation and production runs against Postgres.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::matching::scoring::MatchDetail;
use crate::{Candidate, Experience, Job};

/// Source tag written by automatic batch runs.
pub const MATCH_SOURCE_AUTO: &str = "auto";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
    #[error("failed to map stored record: {0}")]
    Mapping(String),
}

/// One persisted match, unique per (job_id, candidate_id). Re-scoring a pair
/// overwrites the previous row.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub job_id: String,
    pub candidate_id: String,
    pub match_score: f64,
    pub match_detail: MatchDetail,
    pub match_source: String,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn fetch_job(&self, job_id: &str) -> Result<Option<Job>, StoreError>;

    async fn fetch_candidate(&self, candidate_id: &str) -> Result<Option<Candidate>, StoreError>;

    /// Experience rows for one candidate, ordered most recent first.
    async fn fetch_experiences(&self, candidate_id: &str) -> Result<Vec<Experience>, StoreError>;

    async fn list_job_ids(&self) -> Result<Vec<String>, StoreError>;

    async fn list_candidate_ids(&self) -> Result<Vec<String>, StoreError>;

    /// Insert-or-update keyed by (job_id, candidate_id).
    async fn upsert_match(&self, record: &MatchRecord) -> Result<(), StoreError>;
}
