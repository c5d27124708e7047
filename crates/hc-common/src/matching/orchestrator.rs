use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use super::scoring::{compute_match, MatchResult};
use crate::run_id;
use crate::store::{MatchRecord, MatchStore, StoreError, MATCH_SOURCE_AUTO};

/// Pairs scored concurrently at any instant. Bounds load on the record store;
/// batches run sequentially.
pub const DEFAULT_BATCH_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub batch_size: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MatchPairError {
    #[error("job not found: {0}")]
    JobNotFound(String),
    #[error("candidate not found: {0}")]
    CandidateNotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Drives the scorer across every (job, candidate) pair for one job or one
/// candidate: fixed-size batches, concurrent within a batch, one upsert per
/// scored pair, and per-pair failure isolation.
pub struct MatchOrchestrator {
    store: Arc<dyn MatchStore>,
    config: OrchestratorConfig,
}

impl MatchOrchestrator {
    pub fn new(store: Arc<dyn MatchStore>) -> Self {
        Self::with_config(store, OrchestratorConfig::default())
    }

    pub fn with_config(store: Arc<dyn MatchStore>, config: OrchestratorConfig) -> Self {
        Self { store, config }
    }

    /// Scores and persists one pair. `NotFound` means the id stopped
    /// resolving between listing and fetching; batch runs catch it.
    #[instrument(skip(self))]
    pub async fn match_pair(
        &self,
        job_id: &str,
        candidate_id: &str,
    ) -> Result<MatchResult, MatchPairError> {
        let job = self
            .store
            .fetch_job(job_id)
            .await?
            .ok_or_else(|| MatchPairError::JobNotFound(job_id.to_string()))?;
        let candidate = self
            .store
            .fetch_candidate(candidate_id)
            .await?
            .ok_or_else(|| MatchPairError::CandidateNotFound(candidate_id.to_string()))?;
        let experiences = self.store.fetch_experiences(candidate_id).await?;

        let result = compute_match(&job, &candidate, &experiences);

        let record = MatchRecord {
            job_id: job.id.clone(),
            candidate_id: candidate.id.clone(),
            match_score: result.score,
            match_detail: result.detail.clone(),
            match_source: MATCH_SOURCE_AUTO.to_string(),
            updated_at: Utc::now(),
        };
        self.store.upsert_match(&record).await?;

        Ok(result)
    }

    /// Matches one job against every candidate in the store. Returns the
    /// number of pairs scored and persisted; failures are logged, counted,
    /// and never abort the run.
    pub async fn match_job_with_all_candidates(&self, job_id: &str) -> Result<usize, StoreError> {
        let candidate_ids = self.store.list_candidate_ids().await?;
        if candidate_ids.is_empty() {
            info!(job_id = %job_id, "no candidates to match");
            return Ok(0);
        }

        info!(
            job_id = %job_id,
            total = candidate_ids.len(),
            "matching job against all candidates"
        );
        Ok(self
            .run_batches(&candidate_ids, |candidate_id| (job_id, candidate_id))
            .await)
    }

    /// Matches one candidate against every job in the store. Same contract
    /// as [`Self::match_job_with_all_candidates`] with the roles swapped.
    pub async fn match_candidate_with_all_jobs(
        &self,
        candidate_id: &str,
    ) -> Result<usize, StoreError> {
        let job_ids = self.store.list_job_ids().await?;
        if job_ids.is_empty() {
            info!(candidate_id = %candidate_id, "no jobs to match");
            return Ok(0);
        }

        info!(
            candidate_id = %candidate_id,
            total = job_ids.len(),
            "matching candidate against all jobs"
        );
        Ok(self
            .run_batches(&job_ids, |job_id| (job_id, candidate_id))
            .await)
    }

    async fn run_batches<'a, F>(&self, counterpart_ids: &'a [String], to_pair: F) -> usize
    where
        F: Fn(&'a str) -> (&'a str, &'a str),
    {
        let run = run_id::generate();
        let total = counterpart_ids.len();
        let batch_size = self.config.batch_size.max(1);

        let mut succeeded = 0usize;
        let mut failed = 0usize;
        let mut processed = 0usize;

        for batch in counterpart_ids.chunks(batch_size) {
            let outcomes = join_all(batch.iter().map(|counterpart| {
                let (job_id, candidate_id) = to_pair(counterpart);
                async move { (job_id, candidate_id, self.match_pair(job_id, candidate_id).await) }
            }))
            .await;

            for (job_id, candidate_id, outcome) in outcomes {
                match outcome {
                    Ok(result) => {
                        succeeded += 1;
                        debug!(
                            run_id = %run,
                            job_id = %job_id,
                            candidate_id = %candidate_id,
                            score = result.score,
                            "pair scored"
                        );
                    }
                    Err(err) => {
                        failed += 1;
                        warn!(
                            run_id = %run,
                            job_id = %job_id,
                            candidate_id = %candidate_id,
                            error = %err,
                            "pair failed"
                        );
                    }
                }
            }

            processed += batch.len();
            info!(run_id = %run, processed, total, "batch complete");
        }

        info!(run_id = %run, succeeded, failed, "matching run complete");
        succeeded
    }
}
