use crate::normalize::{normalize_opt, normalize_text};
use crate::{Candidate, Experience, Job};

/// Countries presumed Spanish-capable (and partially English-capable) until
/// candidates carry an explicit languages field.
const LATAM_COUNTRIES: &[&str] = &["mexico", "colombia", "argentina", "chile", "brazil", "peru"];

const ENGLISH_SPEAKING_COUNTRIES: &[&str] =
    &["usa", "united states", "uk", "united kingdom", "canada", "australia"];

/// Location and language fit in [0, 1]: the arithmetic mean of the two
/// sub-scores, each defaulting to the neutral 0.5.
pub fn score_location_language(
    job: &Job,
    candidate: &Candidate,
    experiences: &[Experience],
) -> f64 {
    (location_score(job, candidate, experiences) + language_score(job, candidate)) / 2.0
}

fn location_score(job: &Job, candidate: &Candidate, experiences: &[Experience]) -> f64 {
    let preferences = job
        .requirements
        .as_ref()
        .map(|r| r.location_preference.as_slice())
        .unwrap_or(&[]);
    let remote_ok = job.remote_ok.unwrap_or(false);

    let country = normalize_opt(candidate.country.as_deref());

    if preferences.is_empty() || country.is_empty() {
        // Without a preference list (or a candidate country to compare), a
        // remote-friendly job is a full location fit.
        return if remote_ok { 1.0 } else { 0.5 };
    }

    // Most recent experience with a location, as a secondary signal.
    let recent_location = experiences
        .iter()
        .find_map(|exp| exp.location.as_deref().filter(|loc| !loc.trim().is_empty()))
        .map(normalize_text)
        .unwrap_or_default();

    let mut score: f64 = 0.5;
    for preference in preferences {
        let pref = normalize_text(preference);
        if pref.is_empty() {
            continue;
        }

        if country.contains(&pref)
            || pref.contains(&country)
            || (!recent_location.is_empty() && recent_location.contains(&pref))
        {
            score = 1.0;
            break;
        }

        // Regional rule: LATAM preferences accept any LATAM country at 0.9.
        // A later preference can still upgrade this to an exact 1.0.
        if (pref.contains("latam") || pref.contains("latin"))
            && LATAM_COUNTRIES.iter().any(|c| country.contains(c))
        {
            score = 0.9;
        }
    }

    if score <= 0.5 && remote_ok {
        score = 0.6;
    }

    score
}

fn language_score(job: &Job, candidate: &Candidate) -> f64 {
    let required = job
        .requirements
        .as_ref()
        .map(|r| r.languages.as_slice())
        .unwrap_or(&[]);

    if required.is_empty() {
        return 1.0;
    }

    let country = normalize_opt(candidate.country.as_deref());
    let mut score: f64 = 0.5;

    let is_latam_based =
        !country.is_empty() && LATAM_COUNTRIES.iter().any(|c| country.contains(c));

    if is_latam_based {
        if required.iter().any(|lang| normalize_text(lang).contains("spanish")) {
            score += 0.3;
        }
        if required.iter().any(|lang| normalize_text(lang).contains("english")) {
            score += 0.2;
        }
    }

    // English-only requirements are a free pass for candidates from
    // English-speaking countries.
    if required.len() == 1
        && normalize_text(&required[0]).contains("english")
        && !country.is_empty()
        && ENGLISH_SPEAKING_COUNTRIES.iter().any(|c| country.contains(c))
    {
        score = 1.0;
    }

    score.min(1.0)
}
