//! Candidate filter deciding which tokens are worth a dictionary lookup.

/// Tokens of this many letters or fewer are never checked.
pub const MAX_IGNORED_LEN: usize = 2;

/// Whether a normalized token should be spell checked.
///
/// A candidate consists only of ASCII letters, is longer than
/// [`MAX_IGNORED_LEN`], and is not written entirely in upper case
/// (acronyms such as `NASA` are left alone).
///
/// ```
/// use spellreport::analysis::filter::is_candidate;
///
/// assert!(is_candidate("cat"));
/// assert!(!is_candidate("ok"));
/// assert!(!is_candidate("USA"));
/// ```
pub fn is_candidate(token: &str) -> bool {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    if token.len() <= MAX_IGNORED_LEN {
        return false;
    }
    !token.chars().all(|c| c.is_ascii_uppercase())
}
