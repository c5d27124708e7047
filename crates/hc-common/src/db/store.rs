use async_trait::async_trait;

use crate::db::candidates::{self, CandidateStorageError};
use crate::db::experiences::{self, ExperienceStorageError};
use crate::db::jobs::{self, JobStorageError};
use crate::db::match_results::{self, MatchStorageError};
use crate::db::PgPool;
use crate::store::{MatchRecord, MatchStore, StoreError};
use crate::{Candidate, Experience, Job};

/// Production [`MatchStore`] over the deadpool Postgres pool.
pub struct PgMatchStore {
    pool: PgPool,
}

impl PgMatchStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<JobStorageError> for StoreError {
    fn from(value: JobStorageError) -> Self {
        match value {
            JobStorageError::Mapping(msg) => StoreError::Mapping(msg),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

impl From<CandidateStorageError> for StoreError {
    fn from(value: CandidateStorageError) -> Self {
        StoreError::Backend(value.to_string())
    }
}

impl From<ExperienceStorageError> for StoreError {
    fn from(value: ExperienceStorageError) -> Self {
        StoreError::Backend(value.to_string())
    }
}

impl From<MatchStorageError> for StoreError {
    fn from(value: MatchStorageError) -> Self {
        match value {
            MatchStorageError::Mapping(msg) => StoreError::Mapping(msg),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

#[async_trait]
impl MatchStore for PgMatchStore {
    async fn fetch_job(&self, job_id: &str) -> Result<Option<Job>, StoreError> {
        Ok(jobs::fetch_job(&self.pool, job_id).await?)
    }

    async fn fetch_candidate(&self, candidate_id: &str) -> Result<Option<Candidate>, StoreError> {
        Ok(candidates::fetch_candidate(&self.pool, candidate_id).await?)
    }

    async fn fetch_experiences(&self, candidate_id: &str) -> Result<Vec<Experience>, StoreError> {
        Ok(experiences::fetch_experiences_for_candidate(&self.pool, candidate_id).await?)
    }

    async fn list_job_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(jobs::list_job_ids(&self.pool).await?)
    }

    async fn list_candidate_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(candidates::list_candidate_ids(&self.pool).await?)
    }

    async fn upsert_match(&self, record: &MatchRecord) -> Result<(), StoreError> {
        match_results::upsert_match_result(&self.pool, record).await?;
        Ok(())
    }
}
