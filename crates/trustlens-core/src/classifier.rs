//! Verdict classification from unconstrained provider labels.
//!
//! Providers are instructed to return one of three labels, but nothing
//! forces them to. This module maps whatever came back onto the canonical
//! [`Verdict`] enum, with a deliberate safety bias: absence of a strong
//! signal never classifies as Genuine or Fake.

use crate::types::Verdict;

/// Keywords that indicate a trustworthy verdict.
const GENUINE_KEYWORDS: &[&str] = &["genuine", "safe"];

/// Keywords that indicate a fraudulent verdict.
const FAKE_KEYWORDS: &[&str] = &["fake", "scam", "danger"];

/// Map a raw provider-supplied label onto the three-way verdict.
///
/// Case-insensitive substring match, evaluated in fixed order: the
/// genuine/safe group first, then fake/scam/danger, then the Suspicious
/// default. The match is heuristic containment, so labels outside the
/// anticipated vocabulary land on Suspicious rather than guessing.
pub fn classify(raw_label: &str) -> Verdict {
    let label = raw_label.to_lowercase();

    if GENUINE_KEYWORDS.iter().any(|k| label.contains(k)) {
        Verdict::Genuine
    } else if FAKE_KEYWORDS.iter().any(|k| label.contains(k)) {
        Verdict::Fake
    } else {
        Verdict::Suspicious
    }
}
