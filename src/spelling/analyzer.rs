//! Spelling analysis of a tokenized document.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::filter::is_candidate;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::tokenize;
use crate::analysis::word_count::count_words;
use crate::error::Result;
use crate::spelling::oracle::DictionaryOracle;

/// Misspelled surface forms mapped to their suggested replacements.
///
/// Iteration follows first-insertion order; a repeated surface form keeps its
/// original position and takes the latest suggestion.
pub type Corrections = IndexMap<String, String>;

/// Outcome of spell checking one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Misspelled surface forms and their suggestions.
    pub corrections: Corrections,
    /// Number of alphabetic runs in the document.
    pub total_words: usize,
    /// Number of flagged token occurrences.
    ///
    /// Repeated misspellings count once per occurrence, so this can be larger
    /// than `corrections.len()`.
    pub error_count: usize,
}

impl AnalysisResult {
    /// Whether no misspellings were found.
    pub fn is_clean(&self) -> bool {
        self.corrections.is_empty()
    }
}

/// Spell checks documents against an injected [`DictionaryOracle`].
#[derive(Debug, Clone)]
pub struct SpellingAnalyzer<O> {
    oracle: O,
}

impl<O: DictionaryOracle> SpellingAnalyzer<O> {
    /// Create an analyzer around a dictionary oracle.
    pub fn new(oracle: O) -> Self {
        SpellingAnalyzer { oracle }
    }

    /// Tokenize, count and spell check a whole document.
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisResult> {
        let tokens = tokenize(text);
        let mut result = self.analyze(&tokens)?;
        result.total_words = count_words(text);
        Ok(result)
    }

    /// Spell check a token sequence.
    ///
    /// `total_words` is left at zero; it is a property of the raw text, see
    /// [`SpellingAnalyzer::analyze_text`].
    pub fn analyze(&self, tokens: &[Token]) -> Result<AnalysisResult> {
        let candidates: Vec<(&str, String)> = tokens
            .iter()
            .filter(|token| is_candidate(token.normalized()))
            .map(|token| (token.surface(), token.normalized().to_ascii_lowercase()))
            .collect();

        let lookup: BTreeSet<String> = candidates.iter().map(|(_, lower)| lower.clone()).collect();
        let unknown = if lookup.is_empty() {
            BTreeSet::new()
        } else {
            self.oracle.unknown(&lookup)?
        };
        debug!(
            "{} candidates, {} distinct, {} unknown",
            candidates.len(),
            lookup.len(),
            unknown.len()
        );

        let mut suggestions: HashMap<&str, Option<String>> = HashMap::new();
        let mut result = AnalysisResult::default();

        for (surface, lower) in &candidates {
            if !unknown.contains(lower) {
                continue;
            }
            let suggestion = match suggestions.get(lower.as_str()) {
                Some(cached) => cached.clone(),
                None => {
                    let fetched = self.oracle.correction(lower)?;
                    suggestions.insert(lower.as_str(), fetched.clone());
                    fetched
                }
            };
            let replacement = suggestion
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| surface.to_string());
            result.corrections.insert(surface.to_string(), replacement);
            result.error_count += 1;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpellReportError;
    use crate::spelling::dictionary::BuiltinDictionary;
    use crate::spelling::suggest::SuggestionEngine;
    use std::cell::Cell;

    /// Oracle with a fixed unknown set and fixed suggestions.
    struct FixedOracle {
        suggestions: HashMap<String, Option<String>>,
        batch_calls: Cell<usize>,
    }

    impl FixedOracle {
        fn new(entries: &[(&str, Option<&str>)]) -> Self {
            FixedOracle {
                suggestions: entries
                    .iter()
                    .map(|(w, s)| (w.to_string(), s.map(str::to_string)))
                    .collect(),
                batch_calls: Cell::new(0),
            }
        }
    }

    impl DictionaryOracle for FixedOracle {
        fn unknown(&self, words: &BTreeSet<String>) -> Result<BTreeSet<String>> {
            self.batch_calls.set(self.batch_calls.get() + 1);
            Ok(words
                .iter()
                .filter(|w| self.suggestions.contains_key(*w))
                .cloned()
                .collect())
        }

        fn correction(&self, word: &str) -> Result<Option<String>> {
            Ok(self.suggestions.get(word).cloned().flatten())
        }
    }

    struct BrokenOracle;

    impl DictionaryOracle for BrokenOracle {
        fn unknown(&self, _words: &BTreeSet<String>) -> Result<BTreeSet<String>> {
            Err(SpellReportError::dictionary("frequency data missing"))
        }

        fn correction(&self, _word: &str) -> Result<Option<String>> {
            Err(SpellReportError::dictionary("frequency data missing"))
        }
    }

    #[test]
    fn test_reference_scenario() {
        let oracle = FixedOracle::new(&[("teh", Some("the")), ("qick", Some("quick"))]);
        let analyzer = SpellingAnalyzer::new(&oracle);

        let result = analyzer
            .analyze_text("Teh qick fox jumps over teh lazy dog NASA OK ok")
            .unwrap();

        assert_eq!(result.total_words, 11);
        assert_eq!(result.error_count, 3);
        let entries: Vec<(&str, &str)> = result
            .corrections
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![("Teh", "the"), ("qick", "quick"), ("teh", "the")]
        );
        assert_eq!(oracle.batch_calls.get(), 1);
    }

    #[test]
    fn test_repeated_surface_form_counts_every_occurrence() {
        let oracle = FixedOracle::new(&[("teh", Some("the"))]);
        let analyzer = SpellingAnalyzer::new(&oracle);

        let result = analyzer.analyze_text("teh cat teh dog teh").unwrap();
        assert_eq!(result.corrections.len(), 1);
        assert_eq!(result.error_count, 3);
    }

    #[test]
    fn test_missing_suggestion_falls_back_to_surface() {
        let oracle = FixedOracle::new(&[("xyzzy", None), ("blorf", Some(""))]);
        let analyzer = SpellingAnalyzer::new(&oracle);

        let result = analyzer.analyze_text("Xyzzy, said the blorf.").unwrap();
        assert_eq!(result.corrections["Xyzzy,"], "Xyzzy,");
        assert_eq!(result.corrections["blorf."], "blorf.");
        assert!(result.corrections.values().all(|v| !v.is_empty()));
    }

    #[test]
    fn test_surface_keys_keep_punctuation() {
        let oracle = FixedOracle::new(&[("teh", Some("the"))]);
        let analyzer = SpellingAnalyzer::new(&oracle);

        let result = analyzer.analyze_text("(teh) teh teh!").unwrap();
        let keys: Vec<&str> = result.corrections.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["(teh)", "teh", "teh!"]);
        assert_eq!(result.error_count, 3);
    }

    #[test]
    fn test_same_letters_different_surface_are_distinct_keys() {
        let oracle = FixedOracle::new(&[("abcd", Some("abc"))]);
        let analyzer = SpellingAnalyzer::new(&oracle);

        // "ab-cd" and "abcd" normalize alike; the key is the surface form
        let result = analyzer.analyze_text("abcd ab-cd abcd").unwrap();
        assert_eq!(result.corrections.len(), 2);
        assert_eq!(result.corrections.get_index(0).unwrap().0, "abcd");
        assert_eq!(result.error_count, 3);
    }

    #[test]
    fn test_every_key_is_a_candidate() {
        let engine = SuggestionEngine::new(BuiltinDictionary::minimal());
        let analyzer = SpellingAnalyzer::new(engine);

        let result = analyzer
            .analyze_text("Teh qick brwn fox jmps ovr teh lazzy dgo. NASA OK ok i.e. 42")
            .unwrap();

        for key in result.corrections.keys() {
            assert!(is_candidate(&crate::analysis::token::normalize(key)), "{key}");
        }
        assert_eq!(result.corrections["Teh"], "the");
        assert_eq!(result.corrections["qick"], "quick");
    }

    #[test]
    fn test_empty_text() {
        let analyzer = SpellingAnalyzer::new(BrokenOracle);

        // nothing to look up, so the oracle is never consulted
        let result = analyzer.analyze_text("").unwrap();
        assert_eq!(result, AnalysisResult::default());
        assert!(result.is_clean());
    }

    #[test]
    fn test_oracle_failure_is_fatal() {
        let analyzer = SpellingAnalyzer::new(BrokenOracle);
        let err = analyzer.analyze_text("some words here").unwrap_err();
        assert!(err.is_dictionary_unavailable());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = SpellingAnalyzer::new(SuggestionEngine::new(BuiltinDictionary::minimal()));
        let text = "Helo wrold, teh qick report";
        assert_eq!(
            analyzer.analyze_text(text).unwrap(),
            analyzer.analyze_text(text).unwrap()
        );
    }
}
