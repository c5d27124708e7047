pub mod explanation;
pub mod industry;
pub mod location_language;
pub mod orchestrator;
pub mod scoring;
pub mod seniority;
pub mod skills;
pub mod weights;

pub use orchestrator::{
    MatchOrchestrator, MatchPairError, OrchestratorConfig, DEFAULT_BATCH_SIZE,
};
pub use scoring::{compute_match, ComponentScores, MatchDetail, MatchResult};
pub use weights::MATCH_WEIGHTS;
