//! Edit distance used to rank spelling suggestions.

use std::cmp::min;

/// Calculate the optimal string alignment distance between two strings.
///
/// This is Levenshtein distance (insertions, deletions, substitutions) plus
/// transpositions of adjacent characters, matching the edit operations the
/// suggestion engine uses to generate candidates.
#[allow(clippy::needless_range_loop)]
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );

            if i > 1
                && j > 1
                && s1_chars[i - 1] == s2_chars[j - 2]
                && s1_chars[i - 2] == s2_chars[j - 1]
            {
                matrix[i][j] = min(matrix[i][j], matrix[i - 2][j - 2] + 1); // transposition
            }
        }
    }

    matrix[len1][len2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_and_empty() {
        assert_eq!(damerau_levenshtein_distance("hello", "hello"), 0);
        assert_eq!(damerau_levenshtein_distance("", "abc"), 3);
        assert_eq!(damerau_levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(damerau_levenshtein_distance("qick", "quick"), 1); // insertion
        assert_eq!(damerau_levenshtein_distance("helllo", "hello"), 1); // deletion
        assert_eq!(damerau_levenshtein_distance("cat", "cot"), 1); // substitution
        assert_eq!(damerau_levenshtein_distance("teh", "the"), 1); // transposition
    }

    #[test]
    fn test_multiple_edits() {
        assert_eq!(damerau_levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(damerau_levenshtein_distance("wrld", "word"), 2);
    }
}
