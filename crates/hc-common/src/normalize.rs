//! Text normalization shared by every keyword heuristic in the scorer.
//!
//! Matching is deliberately substring-based: job requirements and candidate
//! records carry free text, and the scoring rules are tuned for lowercase
//! containment checks rather than token-boundary matching.

/// Lowercase/trim normalization applied before any comparison.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Normalization for optional fields; absent values become the empty string
/// so they never match anything.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize_text).unwrap_or_default()
}

/// Case-insensitive containment of a single keyword in an already-normalized
/// corpus. Empty keywords never match.
pub fn contains_keyword(corpus: &str, keyword: &str) -> bool {
    let needle = normalize_text(keyword);
    !needle.is_empty() && corpus.contains(&needle)
}

/// True when at least one of the keywords is contained in the corpus.
pub fn contains_any_keyword(corpus: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| contains_keyword(corpus, keyword))
}
