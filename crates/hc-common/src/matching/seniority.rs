use crate::normalize::{normalize_opt, normalize_text};
use crate::Experience;

/// Ordinal scale for seniority labels. Labels outside the vocabulary sit at
/// mid level (3.0) so a typo'd label degrades instead of knocking a pair out.
fn seniority_ordinal(level: &str) -> f64 {
    match level {
        "intern" => 1.0,
        "junior" => 2.0,
        "mid" => 3.0,
        "mid_senior" => 3.5,
        "senior" => 4.0,
        "lead" => 5.0,
        "principal" => 5.0,
        "director" => 6.0,
        "vp" => 7.0,
        "c_level" => 8.0,
        _ => 3.0,
    }
}

/// Seniority alignment score in [0, 1].
///
/// Exact label match wins outright. When both sides carry a label, the
/// ordinal distance decides; when only the job does, role titles and a crude
/// years-of-experience proxy fill in. Insufficient information lands on the
/// neutral 0.5.
pub fn score_seniority(
    job_seniority: Option<&str>,
    candidate_seniority: Option<&str>,
    experiences: &[Experience],
) -> f64 {
    let job_level = normalize_opt(job_seniority);
    let candidate_level = normalize_opt(candidate_seniority);

    if !job_level.is_empty() && !candidate_level.is_empty() && job_level == candidate_level {
        return 1.0;
    }

    if !job_level.is_empty() && !candidate_level.is_empty() {
        let diff = (seniority_ordinal(&job_level) - seniority_ordinal(&candidate_level)).abs();
        return if diff == 0.0 {
            1.0
        } else if diff == 0.5 {
            0.8
        } else if diff == 1.0 {
            0.6
        } else if diff == 2.0 {
            0.4
        } else {
            0.2
        };
    }

    // Candidate never stated a level: infer from role titles.
    if !job_level.is_empty() && candidate_level.is_empty() && !experiences.is_empty() {
        let role_titles = experiences
            .iter()
            .map(|exp| normalize_opt(exp.role_title.as_deref()))
            .collect::<Vec<_>>()
            .join(" ");

        let has_senior = role_titles.contains("senior")
            || role_titles.contains("lead")
            || role_titles.contains("principal");
        let has_mid = role_titles.contains("mid");
        let has_junior = role_titles.contains("junior") || role_titles.contains("intern");

        if job_level.contains("senior") && has_senior {
            return 0.8;
        }
        if job_level.contains("senior") && has_mid {
            return 0.5;
        }
        if job_level.contains("mid") && has_mid {
            return 0.8;
        }
        if job_level.contains("junior") && has_junior {
            return 0.8;
        }

        // Rough proxy: two years per listed role.
        let years_of_experience = experiences.len() * 2;
        if job_level.contains("senior") && years_of_experience >= 5 {
            return 0.7;
        }
        if job_level.contains("mid") && years_of_experience >= 2 {
            return 0.7;
        }
    }

    0.5
}
