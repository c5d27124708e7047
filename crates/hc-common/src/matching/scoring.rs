use serde::{Deserialize, Serialize};

use super::explanation::build_detail;
use super::industry::score_industry;
use super::location_language::score_location_language;
use super::seniority::score_seniority;
use super::skills::score_skills;
use super::weights::MATCH_WEIGHTS;
use crate::{Candidate, Experience, Job};

/// The four component scores, each in [0, 1]. Serialized into the persisted
/// `match_detail` JSON so the breakdown survives recomputation audits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub seniority: f64,
    pub skills: f64,
    pub industry: f64,
    pub location_language: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub summary: String,
    pub components: ComponentScores,
    pub strong_fit: Vec<String>,
    pub gaps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// 0–100 with two decimal places.
    pub score: f64,
    pub detail: MatchDetail,
}

/// Weighted total of the components, still on the 0–1 scale.
pub fn weighted_total(components: &ComponentScores) -> f64 {
    components.seniority * MATCH_WEIGHTS.seniority
        + components.skills * MATCH_WEIGHTS.skills
        + components.industry * MATCH_WEIGHTS.industry
        + components.location_language * MATCH_WEIGHTS.location_language
}

/// Scores one (job, candidate) pair.
///
/// Pure and infallible: missing fields degrade to the documented neutral
/// defaults, and identical inputs always produce identical output. The
/// experience slice is expected ordered most recent first.
pub fn compute_match(job: &Job, candidate: &Candidate, experiences: &[Experience]) -> MatchResult {
    let components = ComponentScores {
        seniority: score_seniority(
            job.seniority_target(),
            candidate.seniority.as_deref(),
            experiences,
        ),
        skills: score_skills(job, candidate, experiences),
        industry: score_industry(job, candidate, experiences),
        location_language: score_location_language(job, candidate, experiences),
    };

    let total = weighted_total(&components);
    let score = (total * 100.0 * 100.0).round() / 100.0;

    let detail = build_detail(job, candidate, experiences, components);

    MatchResult { score, detail }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobRequirements;

    fn latam_job() -> Job {
        Job {
            id: "job-1".into(),
            company_name: "Vemo".into(),
            job_title: "Senior Product Manager".into(),
            job_level: Some("senior".into()),
            remote_ok: Some(false),
            requirements: Some(JobRequirements {
                must_have_skills: vec!["product management".into()],
                industries: vec!["saas".into()],
                location_preference: vec!["latam".into()],
                languages: vec!["spanish".into()],
                ..JobRequirements::default()
            }),
        }
    }

    fn latam_candidate() -> Candidate {
        Candidate {
            id: "cand-1".into(),
            full_name: "Lucia Fernandez".into(),
            seniority: Some("senior".into()),
            country: Some("Mexico".into()),
            ..Candidate::default()
        }
    }

    fn latam_experience() -> Experience {
        Experience {
            id: "exp-1".into(),
            candidate_id: "cand-1".into(),
            role_title: Some("Senior Product Manager".into()),
            company_name: Some("Acme SaaS".into()),
            description: Some("Owned product management for a B2B platform".into()),
            ..Experience::default()
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let job = latam_job();
        let candidate = latam_candidate();
        let experiences = vec![latam_experience()];

        let first = compute_match(&job, &candidate, &experiences);
        let second = compute_match(&job, &candidate, &experiences);

        assert_eq!(first, second);
    }

    #[test]
    fn final_score_is_the_weighted_sum_of_components() {
        let result = compute_match(&latam_job(), &latam_candidate(), &[latam_experience()]);

        let expected = weighted_total(&result.detail.components);
        let expected = (expected * 100.0 * 100.0).round() / 100.0;
        assert_eq!(result.score, expected);
    }

    #[test]
    fn components_and_score_stay_in_range() {
        let sparse = compute_match(&Job::default(), &Candidate::default(), &[]);
        let rich = compute_match(&latam_job(), &latam_candidate(), &[latam_experience()]);

        for result in [sparse, rich] {
            let c = result.detail.components;
            for component in [c.seniority, c.skills, c.industry, c.location_language] {
                assert!((0.0..=1.0).contains(&component));
            }
            assert!((0.0..=100.0).contains(&result.score));
        }
    }

    #[test]
    fn sparse_inputs_still_produce_a_score() {
        let result = compute_match(&Job::default(), &Candidate::default(), &[]);

        // Everything defaults except languages (none required => 1.0), so the
        // location/language component averages up to 0.75.
        let c = result.detail.components;
        assert_eq!(c.seniority, 0.5);
        assert_eq!(c.skills, 0.5);
        assert_eq!(c.industry, 0.5);
        assert_eq!(c.location_language, 0.75);
        assert_eq!(result.score, 55.0);
    }

    #[test]
    fn latam_senior_product_manager_is_a_strong_match() {
        let result = compute_match(&latam_job(), &latam_candidate(), &[latam_experience()]);
        let c = result.detail.components;

        assert_eq!(c.seniority, 1.0);
        assert!(c.skills >= 0.7);
        assert!(c.industry >= 0.6);
        assert!(c.location_language >= 0.7);
        assert!(result.score >= 70.0);
        assert!(result.detail.summary.starts_with("Strong match"));
    }
}
