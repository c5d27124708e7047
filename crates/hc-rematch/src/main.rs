use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use hc_common::db::{create_pool_from_url_checked, PgMatchStore};
use hc_common::matching::{MatchOrchestrator, OrchestratorConfig, DEFAULT_BATCH_SIZE};

/// Operational backfill: re-run matching for one job or one candidate after
/// requirements change or new records land. The same orchestrator the API
/// triggers in the background, driven from the command line.
#[derive(Debug, Parser)]
#[command(name = "hc-rematch", about = "Batch re-matching worker")]
#[command(group = clap::ArgGroup::new("target").required(true).multiple(false))]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Job to score against every candidate
    #[arg(long, group = "target")]
    job_id: Option<String>,

    /// Candidate to score against every job
    #[arg(long, group = "target")]
    candidate_id: Option<String>,

    /// Concurrent pairs per matching batch
    #[arg(long, env = "HC_MATCH_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
}

async fn run(cli: Cli) -> Result<usize, Box<dyn std::error::Error>> {
    let pool = create_pool_from_url_checked(&cli.database_url).await?;
    let store = Arc::new(PgMatchStore::new(pool));
    let orchestrator = MatchOrchestrator::with_config(
        store,
        OrchestratorConfig {
            batch_size: cli.batch_size.max(1),
        },
    );

    let succeeded = match (&cli.job_id, &cli.candidate_id) {
        (Some(job_id), _) => orchestrator.match_job_with_all_candidates(job_id).await?,
        (None, Some(candidate_id)) => {
            orchestrator
                .match_candidate_with_all_jobs(candidate_id)
                .await?
        }
        // clap's arg group guarantees one of the two is present.
        (None, None) => unreachable!("clap requires a target"),
    };

    Ok(succeeded)
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    hc_common::logging::init(env!("CARGO_PKG_NAME"));

    let cli = Cli::parse();

    match run(cli).await {
        Ok(succeeded) => {
            info!(succeeded, "rematch finished");
        }
        Err(err) => {
            tracing::error!(error = %err, "rematch failed");
            std::process::exit(1);
        }
    }
}
