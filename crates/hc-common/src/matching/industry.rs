use crate::normalize::{contains_any_keyword, contains_keyword, normalize_opt};
use crate::{Candidate, Experience, Job};

/// Detection keywords per industry tag. Tags outside the table fall back to
/// the tag itself as the only keyword.
const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "mobility",
        &["mobility", "transport", "uber", "lyft", "ride", "taxi", "delivery", "logistics"],
    ),
    ("ev_charging", &["ev", "electric", "charging", "vehicle", "tesla", "battery"]),
    ("consumer_apps", &["consumer", "mobile", "app", "ios", "android", "b2c"]),
    ("saas", &["saas", "software", "b2b", "enterprise", "platform"]),
    ("fintech", &["fintech", "finance", "payment", "banking", "crypto"]),
    ("ecommerce", &["ecommerce", "retail", "marketplace", "shopping"]),
];

/// Generic signals that a candidate is at least tech-adjacent, used for
/// partial credit when none of the required industries matched.
const TECH_KEYWORDS: &[&str] = &["tech", "software", "saas", "product", "startup", "digital"];

fn industry_corpus(candidate: &Candidate, experiences: &[Experience]) -> String {
    let mut parts = vec![normalize_opt(candidate.industry.as_deref())];
    parts.extend(experiences.iter().map(|exp| normalize_opt(exp.company_name.as_deref())));
    parts.extend(experiences.iter().map(|exp| normalize_opt(exp.role_title.as_deref())));
    parts.extend(experiences.iter().map(|exp| normalize_opt(exp.description.as_deref())));
    parts.join(" ")
}

fn tag_matches(corpus: &str, tag: &str) -> bool {
    match INDUSTRY_KEYWORDS.iter().find(|(known, _)| *known == tag) {
        Some((_, keywords)) => contains_any_keyword(corpus, keywords),
        None => contains_keyword(corpus, tag),
    }
}

/// Industry fit score in [0, 1].
///
/// Full coverage of the required tags scores 1.0; partial coverage lands in
/// the 0.6–0.9 band; no coverage keeps 0.4 for tech-adjacent candidates and
/// 0.2 for everyone else. Jobs without industry tags are neutral.
pub fn score_industry(job: &Job, candidate: &Candidate, experiences: &[Experience]) -> f64 {
    let required = job
        .requirements
        .as_ref()
        .map(|r| r.industries.as_slice())
        .unwrap_or(&[]);

    if required.is_empty() {
        return 0.5;
    }

    let corpus = industry_corpus(candidate, experiences);

    let matched = required
        .iter()
        .filter(|tag| tag_matches(&corpus, tag))
        .count();

    if matched == required.len() {
        return 1.0;
    }
    if matched > 0 {
        return 0.6 + (matched as f64 / required.len() as f64) * 0.3;
    }

    if contains_any_keyword(&corpus, TECH_KEYWORDS) {
        return 0.4;
    }

    0.2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobRequirements;

    fn job_with_industries(tags: &[&str]) -> Job {
        Job {
            requirements: Some(JobRequirements {
                industries: tags.iter().map(|s| s.to_string()).collect(),
                ..JobRequirements::default()
            }),
            ..Job::default()
        }
    }

    fn exp_at(company: &str) -> Experience {
        Experience {
            company_name: Some(company.to_string()),
            ..Experience::default()
        }
    }

    #[test]
    fn no_required_industries_is_neutral() {
        let job = job_with_industries(&[]);
        assert_eq!(score_industry(&job, &Candidate::default(), &[]), 0.5);
    }

    #[test]
    fn all_tags_matched_scores_full() {
        let job = job_with_industries(&["saas"]);
        let experiences = vec![exp_at("Acme SaaS")];

        assert_eq!(score_industry(&job, &Candidate::default(), &experiences), 1.0);
    }

    #[test]
    fn partial_coverage_lands_in_the_mid_band() {
        let job = job_with_industries(&["fintech", "mobility"]);
        let experiences = vec![exp_at("Global Payments Inc")];

        // 1 of 2 tags: 0.6 + 0.5 * 0.3
        let score = score_industry(&job, &Candidate::default(), &experiences);
        assert!((score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn tech_adjacent_candidates_keep_partial_credit() {
        let job = job_with_industries(&["ev_charging"]);
        let candidate = Candidate {
            industry: Some("software".into()),
            ..Candidate::default()
        };

        assert_eq!(score_industry(&job, &candidate, &[]), 0.4);
    }

    #[test]
    fn unrelated_background_scores_low() {
        let job = job_with_industries(&["fintech"]);
        let candidate = Candidate {
            industry: Some("agriculture".into()),
            ..Candidate::default()
        };

        assert_eq!(score_industry(&job, &candidate, &[]), 0.2);
    }

    #[test]
    fn unknown_tags_match_on_the_tag_itself() {
        let job = job_with_industries(&["healthtech"]);
        let candidate = Candidate {
            industry: Some("healthtech startups".into()),
            ..Candidate::default()
        };

        assert_eq!(score_industry(&job, &candidate, &[]), 1.0);
    }
}
