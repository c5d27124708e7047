use crate::normalize::{contains_keyword, normalize_opt};
use crate::{Candidate, Experience, Job};

const MUST_HAVE_WEIGHT: f64 = 0.7;
const NICE_TO_HAVE_WEIGHT: f64 = 0.3;
/// Applied after weighting when a job lists must-have skills and none of
/// them appear anywhere in the candidate's record.
const MISSING_MUST_HAVE_PENALTY: f64 = 0.3;

/// Everything the skill keywords are searched against: current title and
/// industry plus role titles, descriptions, and company names of every
/// experience row.
fn skill_corpus(candidate: &Candidate, experiences: &[Experience]) -> String {
    let mut parts = vec![
        normalize_opt(candidate.current_job_title.as_deref()),
        normalize_opt(candidate.industry.as_deref()),
    ];
    parts.extend(experiences.iter().map(|exp| normalize_opt(exp.role_title.as_deref())));
    parts.extend(experiences.iter().map(|exp| normalize_opt(exp.description.as_deref())));
    parts.extend(experiences.iter().map(|exp| normalize_opt(exp.company_name.as_deref())));
    parts.join(" ")
}

fn count_matches(corpus: &str, skills: &[String]) -> usize {
    skills
        .iter()
        .filter(|skill| contains_keyword(corpus, skill))
        .count()
}

/// Skills overlap score in [0, 1].
///
/// Must-have and nice-to-have tiers are matched by substring containment and
/// combined 0.7/0.3. A job with must-have skills and zero hits gets the
/// combined score multiplied down to 30% — the strongest negative signal the
/// scorer produces.
pub fn score_skills(job: &Job, candidate: &Candidate, experiences: &[Experience]) -> f64 {
    let Some(requirements) = job.requirements.as_ref() else {
        return 0.5;
    };

    let must_have = &requirements.must_have_skills;
    let nice_to_have = &requirements.nice_to_have_skills;

    if must_have.is_empty() && nice_to_have.is_empty() {
        return 0.5;
    }

    let corpus = skill_corpus(candidate, experiences);

    let must_have_matches = count_matches(&corpus, must_have);
    let nice_to_have_matches = count_matches(&corpus, nice_to_have);

    let must_have_score = if must_have.is_empty() {
        0.0
    } else {
        must_have_matches as f64 / must_have.len() as f64
    };
    let nice_to_have_score = if nice_to_have.is_empty() {
        0.0
    } else {
        nice_to_have_matches as f64 / nice_to_have.len() as f64
    };

    let base_score =
        must_have_score * MUST_HAVE_WEIGHT + nice_to_have_score * NICE_TO_HAVE_WEIGHT;

    if !must_have.is_empty() && must_have_matches == 0 {
        return base_score * MISSING_MUST_HAVE_PENALTY;
    }

    base_score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobRequirements;

    fn job_with_skills(must: &[&str], nice: &[&str]) -> Job {
        Job {
            requirements: Some(JobRequirements {
                must_have_skills: must.iter().map(|s| s.to_string()).collect(),
                nice_to_have_skills: nice.iter().map(|s| s.to_string()).collect(),
                ..JobRequirements::default()
            }),
            ..Job::default()
        }
    }

    fn candidate_with_title(title: &str) -> Candidate {
        Candidate {
            current_job_title: Some(title.to_string()),
            ..Candidate::default()
        }
    }

    fn exp(role_title: &str, description: &str, company: &str) -> Experience {
        Experience {
            role_title: Some(role_title.to_string()),
            description: Some(description.to_string()),
            company_name: Some(company.to_string()),
            ..Experience::default()
        }
    }

    #[test]
    fn no_requirements_is_neutral() {
        let job = Job::default();
        assert_eq!(score_skills(&job, &Candidate::default(), &[]), 0.5);

        let empty = job_with_skills(&[], &[]);
        assert_eq!(score_skills(&empty, &Candidate::default(), &[]), 0.5);
    }

    #[test]
    fn full_must_have_coverage_scores_point_seven() {
        let job = job_with_skills(&["product management"], &[]);
        let candidate = candidate_with_title("Head of Product Management");

        let score = score_skills(&job, &candidate, &[]);
        assert!((score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn nice_to_have_tops_up_the_score() {
        let job = job_with_skills(&["sql"], &["python", "tableau"]);
        let candidate = candidate_with_title("Data Analyst (SQL, Python)");

        // must 1/1 => 0.7, nice 1/2 => 0.15
        let score = score_skills(&job, &candidate, &[]);
        assert!((score - 0.85).abs() < 1e-9);
    }

    #[test]
    fn zero_must_have_hits_collapses_the_score() {
        let job = job_with_skills(&["kubernetes"], &["python"]);
        let candidate = candidate_with_title("Python Developer");

        // must 0/1 => 0.0, nice 1/1 => 0.3; penalty: 0.3 * 0.3 = 0.09
        let score = score_skills(&job, &candidate, &[]);
        assert!((score - 0.09).abs() < 1e-9);
    }

    #[test]
    fn experience_rows_feed_the_corpus() {
        let job = job_with_skills(&["growth", "pricing"], &[]);
        let experiences = vec![
            exp("Growth Lead", "owned acquisition funnels", "Rappi"),
            exp("PM", "ran pricing experiments for marketplace sellers", "Mercado Libre"),
        ];

        let score = score_skills(&job, &Candidate::default(), &experiences);
        assert!((score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn score_never_exceeds_one() {
        let job = job_with_skills(&["product"], &["product"]);
        let candidate = candidate_with_title("Product Manager");

        assert!(score_skills(&job, &candidate, &[]) <= 1.0);
    }
}
