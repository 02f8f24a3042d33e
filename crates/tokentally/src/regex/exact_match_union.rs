//! Exact Match Union Patterns

use crate::regex::RegexPattern;

/// Create a union pattern of exact matches.
///
/// Alternatives are ordered longest-first (ties broken lexically), so that the
/// leftmost-first alternation of the engine finds the leftmost-longest literal.
///
/// This will always be a [`RegexPattern::Basic`] variant.
///
/// ## Arguments
/// * `alts` - A slice of string-like alternatives to union.
pub fn exact_match_union_regex_pattern<S: AsRef<str>>(alts: &[S]) -> RegexPattern {
    let mut alts = alts.iter().map(|s| s.as_ref()).collect::<Vec<_>>();
    alts.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    alts.dedup();

    let parts = alts
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>();
    RegexPattern::Basic(format!("({})", parts.join("|")))
}
