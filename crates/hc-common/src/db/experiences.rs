use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tokio_postgres::Row;
use tracing::instrument;

use crate::db::PgPool;
use crate::Experience;

#[derive(Debug, thiserror::Error)]
pub enum ExperienceStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

fn experience_from_row(row: &Row) -> Experience {
    Experience {
        id: row.get("id"),
        candidate_id: row.get("candidate_id"),
        company_name: row.get("company_name"),
        role_title: row.get("role_title"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        location: row.get("location"),
        description: row.get("description"),
    }
}

/// Experience rows for one candidate, most recent first. Undated rows sort
/// last so the freshest location stays at the front for the scorer.
#[instrument(skip(pool))]
pub async fn fetch_experiences_for_candidate(
    pool: &PgPool,
    candidate_id: &str,
) -> Result<Vec<Experience>, ExperienceStorageError> {
    let client = pool.get().await?;

    let rows = client
        .query(
            "SELECT id, candidate_id, company_name, role_title,
                    start_date, end_date, location, description
             FROM hc.candidate_experience
             WHERE candidate_id = $1
             ORDER BY start_date DESC NULLS LAST",
            &[&candidate_id],
        )
        .await?;

    Ok(rows.iter().map(experience_from_row).collect())
}

#[instrument(skip(pool, experience))]
pub async fn insert_experience(
    pool: &PgPool,
    experience: &Experience,
) -> Result<u64, ExperienceStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare(
            "INSERT INTO hc.candidate_experience (
                id, candidate_id, company_name, role_title,
                start_date, end_date, location, description
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .await?;

    let rows = client
        .execute(
            &stmt,
            &[
                &experience.id,
                &experience.candidate_id,
                &experience.company_name,
                &experience.role_title,
                &experience.start_date,
                &experience.end_date,
                &experience.location,
                &experience.description,
            ],
        )
        .await?;

    Ok(rows)
}
