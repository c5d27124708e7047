use chrono::Utc;
use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tokio_postgres::Row;
use tracing::instrument;

use crate::db::PgPool;
use crate::Candidate;

#[derive(Debug, thiserror::Error)]
pub enum CandidateStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

fn candidate_from_row(row: &Row) -> Candidate {
    Candidate {
        id: row.get("id"),
        full_name: row.get("full_name"),
        current_job_title: row.get("current_job_title"),
        current_company: row.get("current_company"),
        industry: row.get("industry"),
        seniority: row.get("seniority"),
        country: row.get("country"),
    }
}

#[instrument(skip(pool))]
pub async fn fetch_candidate(
    pool: &PgPool,
    candidate_id: &str,
) -> Result<Option<Candidate>, CandidateStorageError> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            "SELECT id, full_name, current_job_title, current_company, industry, seniority, country
             FROM hc.candidates
             WHERE id = $1",
            &[&candidate_id],
        )
        .await?;

    Ok(row.as_ref().map(candidate_from_row))
}

#[instrument(skip(pool))]
pub async fn list_candidate_ids(pool: &PgPool) -> Result<Vec<String>, CandidateStorageError> {
    let client = pool.get().await?;

    let rows = client
        .query("SELECT id FROM hc.candidates ORDER BY id", &[])
        .await?;

    Ok(rows.into_iter().map(|row| row.get("id")).collect())
}

#[instrument(skip(pool, candidate))]
pub async fn insert_candidate(
    pool: &PgPool,
    candidate: &Candidate,
) -> Result<u64, CandidateStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare(
            "INSERT INTO hc.candidates (
                id, full_name, current_job_title, current_company,
                industry, seniority, country, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .await?;

    let rows = client
        .execute(
            &stmt,
            &[
                &candidate.id,
                &candidate.full_name,
                &candidate.current_job_title,
                &candidate.current_company,
                &candidate.industry,
                &candidate.seniority,
                &candidate.country,
                &Utc::now(),
            ],
        )
        .await?;

    Ok(rows)
}
