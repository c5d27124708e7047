use chrono::{DateTime, Utc};
use deadpool_postgres::PoolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_postgres::types::Json;
use tokio_postgres::Error as PgError;
use tracing::instrument;

use crate::db::PgPool;
use crate::matching::MatchDetail;
use crate::store::MatchRecord;

#[derive(Debug, thiserror::Error)]
pub enum MatchStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
    #[error("failed to map match row: {0}")]
    Mapping(String),
}

/// A match as read back from storage, for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMatch {
    pub job_id: String,
    pub candidate_id: String,
    pub match_score: f64,
    pub match_detail: MatchDetail,
    pub match_source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn parse_detail(value: Option<Value>) -> MatchDetail {
    value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// Insert-or-update keyed by (job_id, candidate_id); recomputation
/// overwrites score, detail, source, and `updated_at` in place.
#[instrument(skip(pool, record))]
pub async fn upsert_match_result(
    pool: &PgPool,
    record: &MatchRecord,
) -> Result<u64, MatchStorageError> {
    let client = pool.get().await?;

    let detail = serde_json::to_value(&record.match_detail)
        .map_err(|err| MatchStorageError::Mapping(err.to_string()))?;

    let stmt = client
        .prepare(
            "INSERT INTO hc.job_candidate_matches (
                job_id, candidate_id, match_score, match_detail,
                match_source, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $6)
            ON CONFLICT (job_id, candidate_id) DO UPDATE SET
                match_score = EXCLUDED.match_score,
                match_detail = EXCLUDED.match_detail,
                match_source = EXCLUDED.match_source,
                updated_at = EXCLUDED.updated_at;",
        )
        .await?;

    let rows = client
        .execute(
            &stmt,
            &[
                &record.job_id,
                &record.candidate_id,
                &record.match_score,
                &Json(&detail),
                &record.match_source,
                &record.updated_at,
            ],
        )
        .await?;

    Ok(rows)
}

/// Persisted matches for one job, best first.
#[instrument(skip(pool))]
pub async fn fetch_matches_for_job(
    pool: &PgPool,
    job_id: &str,
) -> Result<Vec<StoredMatch>, MatchStorageError> {
    let client = pool.get().await?;

    let rows = client
        .query(
            "SELECT job_id, candidate_id, match_score, match_detail,
                    match_source, created_at, updated_at
             FROM hc.job_candidate_matches
             WHERE job_id = $1
             ORDER BY match_score DESC, updated_at DESC",
            &[&job_id],
        )
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| StoredMatch {
            job_id: row.get("job_id"),
            candidate_id: row.get("candidate_id"),
            match_score: row.get("match_score"),
            match_detail: parse_detail(row.get("match_detail")),
            match_source: row.get("match_source"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
        .collect())
}
