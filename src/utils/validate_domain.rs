//! DNS-label validation of candidate hosts.

use regex::Regex;
use std::sync::LazyLock;

/// Full-match pattern: one or more dot-terminated DNS labels followed by a
/// final label. Labels are lowercase alphanumerics with interior hyphens,
/// 63 characters at most, never starting or ending with a hyphen.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$")
        .unwrap()
});

/// Validates a candidate host as a registrable domain.
///
/// The candidate must match the label grammar in full: at least two labels,
/// so bare single-label hosts like `localhost` are rejected. The matched
/// string is returned unchanged, with no normalization applied.
///
/// Uppercase input fails validation: the character classes are deliberately
/// lowercase-only and no case-folding happens anywhere in the pipeline.
pub fn validate(candidate: &str) -> Option<String> {
    DOMAIN_REGEX
        .is_match(candidate)
        .then(|| candidate.to_string())
}
