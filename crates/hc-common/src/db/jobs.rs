use chrono::Utc;
use deadpool_postgres::PoolError;
use serde_json::Value;
use tokio_postgres::types::Json;
use tokio_postgres::Error as PgError;
use tokio_postgres::Row;
use tracing::instrument;

use crate::db::PgPool;
use crate::Job;

#[derive(Debug, thiserror::Error)]
pub enum JobStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
    #[error("failed to map job row: {0}")]
    Mapping(String),
}

fn job_from_row(row: &Row) -> Result<Job, JobStorageError> {
    let requirements = row
        .get::<_, Option<Value>>("requirements_json")
        .map(serde_json::from_value)
        .transpose()
        .map_err(|err| JobStorageError::Mapping(err.to_string()))?;

    Ok(Job {
        id: row.get("id"),
        company_name: row.get("company_name"),
        job_title: row.get("job_title"),
        job_level: row.get("job_level"),
        remote_ok: row.get("remote_ok"),
        requirements,
    })
}

#[instrument(skip(pool))]
pub async fn fetch_job(pool: &PgPool, job_id: &str) -> Result<Option<Job>, JobStorageError> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            "SELECT id, company_name, job_title, job_level, remote_ok, requirements_json
             FROM hc.jobs
             WHERE id = $1",
            &[&job_id],
        )
        .await?;

    row.as_ref().map(job_from_row).transpose()
}

#[instrument(skip(pool))]
pub async fn list_job_ids(pool: &PgPool) -> Result<Vec<String>, JobStorageError> {
    let client = pool.get().await?;

    let rows = client
        .query("SELECT id FROM hc.jobs ORDER BY id", &[])
        .await?;

    Ok(rows.into_iter().map(|row| row.get("id")).collect())
}

#[instrument(skip(pool, job))]
pub async fn insert_job(pool: &PgPool, job: &Job) -> Result<u64, JobStorageError> {
    let client = pool.get().await?;

    let requirements = job
        .requirements
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(|err| JobStorageError::Mapping(err.to_string()))?;

    let stmt = client
        .prepare(
            "INSERT INTO hc.jobs (
                id, company_name, job_title, job_level, remote_ok, requirements_json, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .await?;

    let rows = client
        .execute(
            &stmt,
            &[
                &job.id,
                &job.company_name,
                &job.job_title,
                &job.job_level,
                &job.remote_ok,
                &requirements.as_ref().map(Json),
                &Utc::now(),
            ],
        )
        .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobRequirements;

    #[test]
    fn requirements_round_trip_through_json() {
        let requirements = JobRequirements {
            seniority: Some("senior".into()),
            must_have_skills: vec!["sql".into()],
            ..JobRequirements::default()
        };

        let value = serde_json::to_value(&requirements).unwrap();
        let parsed: JobRequirements = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, requirements);
    }
}
