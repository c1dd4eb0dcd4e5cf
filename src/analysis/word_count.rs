//! Word counting for the report summary.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LETTER_RUN: Regex = Regex::new(r"[A-Za-z]+").unwrap();
}

/// Count maximal runs of ASCII letters in `text`.
///
/// Unlike the candidate filter, this counts every run: short words,
/// acronyms, and the letter pieces of hyphenated or apostrophised words.
pub fn count_words(text: &str) -> usize {
    LETTER_RUN.find_iter(text).count()
}
