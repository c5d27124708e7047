//! ULID helpers for record ids and matching-run ids.
//!
//! New jobs, candidates, and experience rows get a fresh ULID; each batch
//! matching run also carries one so every log line of a run can be grouped
//! after the fact. ULIDs sort lexicographically by creation time, which keeps
//! listings in insertion order without an extra column.

use once_cell::sync::Lazy;
use ulid::Ulid;

/// Process-level id, generated once at first access. Background runs spawned
/// from the same service instance share it.
static PROCESS_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// Returns the process-level id.
#[inline]
pub fn process() -> &'static str {
    &PROCESS_ID
}

/// Generates a fresh ULID, for new records and per-run identifiers.
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}
