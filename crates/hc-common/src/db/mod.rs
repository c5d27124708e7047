pub mod candidates;
pub mod experiences;
pub mod jobs;
pub mod match_results;
pub mod pool;
pub mod store;

// Keep re-exports unique so downstream crates see a single symbol per helper.
pub use candidates::{fetch_candidate, insert_candidate, list_candidate_ids, CandidateStorageError};
pub use experiences::{
    fetch_experiences_for_candidate, insert_experience, ExperienceStorageError,
};
pub use jobs::{fetch_job, insert_job, list_job_ids, JobStorageError};
pub use match_results::{
    fetch_matches_for_job, upsert_match_result, MatchStorageError, StoredMatch,
};
pub use pool::{create_pool_from_url, create_pool_from_url_checked, DbPoolError, PgPool};
pub use store::PgMatchStore;
