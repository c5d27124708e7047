//! Human-readable explanation of a match: one summary sentence plus lists of
//! strengths and gaps. Derived purely from the component scores and display
//! fields, so regenerating a match regenerates the same text.

use super::scoring::{weighted_total, ComponentScores, MatchDetail};
use crate::normalize::{contains_keyword, normalize_opt};
use crate::{Candidate, Experience, Job};

const STRONG_COMPONENT: f64 = 0.7;
const STRONG_LOCATION: f64 = 0.8;
const GAP_COMPONENT: f64 = 0.5;

/// Narrow corpus for naming concrete skills in the explanation: only the
/// current title and past role titles, so the listed skills are ones a
/// reader can verify at a glance.
fn title_corpus(candidate: &Candidate, experiences: &[Experience]) -> String {
    let mut parts = vec![normalize_opt(candidate.current_job_title.as_deref())];
    parts.extend(experiences.iter().map(|exp| normalize_opt(exp.role_title.as_deref())));
    parts.join(" ")
}

pub(super) fn build_detail(
    job: &Job,
    candidate: &Candidate,
    experiences: &[Experience],
    components: ComponentScores,
) -> MatchDetail {
    let mut strong_fit = Vec::new();
    let mut gaps = Vec::new();

    let must_have: &[String] = job
        .requirements
        .as_ref()
        .map(|r| r.must_have_skills.as_slice())
        .unwrap_or(&[]);
    let corpus = title_corpus(candidate, experiences);

    if components.seniority >= STRONG_COMPONENT {
        strong_fit.push(format!(
            "Strong seniority match: {} candidate for {} position.",
            candidate.seniority.as_deref().unwrap_or("experienced"),
            job.job_level.as_deref().unwrap_or("role"),
        ));
    }

    if components.skills >= STRONG_COMPONENT {
        let matched: Vec<&str> = must_have
            .iter()
            .filter(|skill| contains_keyword(&corpus, skill))
            .map(String::as_str)
            .collect();
        if !matched.is_empty() {
            strong_fit.push(format!(
                "Strong skills match: {} experience found.",
                matched.join(", ")
            ));
        }
    }

    if components.industry >= STRONG_COMPONENT {
        strong_fit.push(format!(
            "Strong industry fit: {} experience aligns with job requirements.",
            candidate.industry.as_deref().unwrap_or("relevant industry"),
        ));
    }

    if components.location_language >= STRONG_LOCATION {
        strong_fit.push(format!(
            "Location and language alignment: {} matches preferences.",
            candidate.country.as_deref().unwrap_or("location"),
        ));
    }

    if components.skills < GAP_COMPONENT {
        let missing: Vec<&str> = must_have
            .iter()
            .filter(|skill| !contains_keyword(&corpus, skill))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            gaps.push(format!("Missing key skills: {}.", missing.join(", ")));
        }
    }

    if components.industry < GAP_COMPONENT {
        let industries: &[String] = job
            .requirements
            .as_ref()
            .map(|r| r.industries.as_slice())
            .unwrap_or(&[]);
        if !industries.is_empty() {
            gaps.push(format!(
                "Limited experience in required industries: {}.",
                industries.join(", ")
            ));
        }
    }

    if components.seniority < GAP_COMPONENT {
        gaps.push(format!(
            "Seniority mismatch: candidate level may not align with {} position.",
            job.job_level.as_deref().unwrap_or("required"),
        ));
    }

    let summary = summarize(job, candidate, &components);

    MatchDetail {
        summary,
        components,
        strong_fit,
        gaps,
    }
}

/// One of three fixed sentences, keyed by the weighted total. The numeric
/// score is never shown here; the tier alone carries the message.
fn summarize(job: &Job, candidate: &Candidate, components: &ComponentScores) -> String {
    let total = weighted_total(components);

    if total >= 0.7 {
        format!(
            "Strong match: {} has relevant experience and aligns well with {} at {}.",
            candidate.full_name, job.job_title, job.company_name
        )
    } else if total >= 0.5 {
        format!(
            "Moderate match: {} has some relevant experience but may have gaps in specific requirements.",
            candidate.full_name
        )
    } else {
        format!(
            "Weak match: {} has limited alignment with the job requirements.",
            candidate.full_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobRequirements;

    fn job() -> Job {
        Job {
            id: "job-9".into(),
            company_name: "Kavak".into(),
            job_title: "Growth Lead".into(),
            job_level: Some("senior".into()),
            remote_ok: Some(true),
            requirements: Some(JobRequirements {
                must_have_skills: vec!["growth".into(), "analytics".into()],
                industries: vec!["mobility".into()],
                ..JobRequirements::default()
            }),
        }
    }

    fn candidate() -> Candidate {
        Candidate {
            id: "cand-9".into(),
            full_name: "Ana Ruiz".into(),
            current_job_title: Some("Growth Manager".into()),
            seniority: Some("senior".into()),
            country: Some("Mexico".into()),
            ..Candidate::default()
        }
    }

    fn components(seniority: f64, skills: f64, industry: f64, location_language: f64) -> ComponentScores {
        ComponentScores {
            seniority,
            skills,
            industry,
            location_language,
        }
    }

    #[test]
    fn strong_components_produce_strength_entries() {
        let detail = build_detail(&job(), &candidate(), &[], components(1.0, 0.8, 0.9, 0.9));

        assert!(detail.strong_fit.iter().any(|s| s.contains("seniority match")));
        // Only "growth" is visible in the title corpus.
        assert!(detail
            .strong_fit
            .iter()
            .any(|s| s.contains("Strong skills match: growth")));
        assert!(detail.strong_fit.iter().any(|s| s.contains("industry fit")));
        assert!(detail.strong_fit.iter().any(|s| s.contains("Mexico matches preferences")));
        assert!(detail.gaps.is_empty());
    }

    #[test]
    fn weak_components_produce_gap_entries() {
        let detail = build_detail(&job(), &candidate(), &[], components(0.2, 0.15, 0.2, 0.5));

        // "growth" is in the title, so only "analytics" is reported missing.
        assert!(detail.gaps.iter().any(|g| g == "Missing key skills: analytics."));
        assert!(detail
            .gaps
            .iter()
            .any(|g| g.contains("required industries: mobility")));
        assert!(detail.gaps.iter().any(|g| g.contains("Seniority mismatch")));
        assert!(detail.strong_fit.is_empty());
    }

    #[test]
    fn summary_tier_follows_the_weighted_total() {
        let strong = build_detail(&job(), &candidate(), &[], components(1.0, 1.0, 1.0, 1.0));
        assert!(strong.summary.starts_with("Strong match: Ana Ruiz"));
        assert!(strong.summary.contains("Growth Lead at Kavak"));

        let moderate = build_detail(&job(), &candidate(), &[], components(0.5, 0.6, 0.5, 0.6));
        assert!(moderate.summary.starts_with("Moderate match"));

        let weak = build_detail(&job(), &candidate(), &[], components(0.2, 0.2, 0.2, 0.2));
        assert!(weak.summary.starts_with("Weak match"));
    }

    #[test]
    fn skills_strength_is_skipped_without_a_visible_skill() {
        let mut c = candidate();
        c.current_job_title = Some("Country Manager".into());

        let detail = build_detail(&job(), &c, &[], components(0.5, 0.9, 0.5, 0.5));
        assert!(!detail.strong_fit.iter().any(|s| s.contains("skills match")));
    }
}
