//! Spelling suggestion generation.

use std::collections::{BTreeSet, HashSet};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellReportError};
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::levenshtein::damerau_levenshtein_distance;
use crate::spelling::oracle::DictionaryOracle;

/// A spelling suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the original word.
    pub distance: usize,
    /// Frequency of the suggested word in the dictionary.
    pub frequency: u64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize, frequency: u64) -> Self {
        Suggestion {
            word,
            distance,
            frequency,
        }
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum edit distance to consider (1 or 2).
    pub max_distance: usize,
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_distance: 2,
            max_suggestions: 5,
        }
    }
}

impl SuggestionConfig {
    /// Check that the configuration can be used by the engine.
    pub fn validate(&self) -> Result<()> {
        if !(1..=2).contains(&self.max_distance) {
            return Err(SpellReportError::invalid_config(format!(
                "max_distance must be 1 or 2, got {}",
                self.max_distance
            )));
        }
        if self.max_suggestions == 0 {
            return Err(SpellReportError::invalid_config(
                "max_suggestions must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Frequency-ranked suggestion engine over a [`SpellingDictionary`].
///
/// Candidates one edit away always win over candidates two edits away; within
/// the same distance the more frequent word wins.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    dictionary: SpellingDictionary,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the given dictionary.
    pub fn new(dictionary: SpellingDictionary) -> Self {
        SuggestionEngine {
            dictionary,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(dictionary: SpellingDictionary, config: SuggestionConfig) -> Self {
        SuggestionEngine { dictionary, config }
    }

    /// Check if a word exists in the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Get dictionary statistics as (unique words, total frequency).
    pub fn dictionary_stats(&self) -> (usize, u64) {
        (
            self.dictionary.word_count(),
            self.dictionary.total_frequency(),
        )
    }

    /// Get ranked suggestions for a potentially misspelled word.
    ///
    /// A word that is already known is returned as its own single suggestion.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        let word_lower = word.to_lowercase();

        if self.dictionary.contains(&word_lower) {
            let frequency = self.dictionary.frequency(&word_lower);
            return vec![Suggestion::new(word_lower, 0, frequency)];
        }

        let mut result: Vec<Suggestion> = self
            .generate_candidates(&word_lower)
            .into_iter()
            .map(|candidate| {
                let distance = damerau_levenshtein_distance(&word_lower, &candidate);
                let frequency = self.dictionary.frequency(&candidate);
                Suggestion::new(candidate, distance, frequency)
            })
            .collect();

        result.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.frequency.cmp(&a.frequency))
                .then_with(|| a.word.cmp(&b.word))
        });
        result.truncate(self.config.max_suggestions);
        result
    }

    /// The single best replacement for a word, if any.
    pub fn best(&self, word: &str) -> Option<String> {
        self.suggest(word).into_iter().next().map(|s| s.word)
    }

    /// Whether `word` is short enough to have dictionary words within reach.
    ///
    /// Words more than three characters longer than the longest dictionary
    /// word (URLs, hashes, run-together junk) get no candidates.
    fn within_reach(&self, word: &str) -> bool {
        word.chars().count() <= self.dictionary.longest_word_length() + 3
    }

    /// Known words one edit away, or two edits away when none are one away.
    fn generate_candidates(&self, word: &str) -> HashSet<String> {
        if !self.within_reach(word) {
            debug!("skipping candidates for {} characters", word.chars().count());
            return HashSet::new();
        }

        let first_edits = Self::generate_edits(word);

        let mut candidates: HashSet<String> = first_edits
            .iter()
            .filter(|edit| self.dictionary.contains(edit))
            .cloned()
            .collect();

        if candidates.is_empty() && self.config.max_distance >= 2 {
            for edit in &first_edits {
                candidates.extend(
                    Self::generate_edits(edit)
                        .into_iter()
                        .filter(|second| self.dictionary.contains(second)),
                );
            }
        }

        candidates
    }

    /// Generate all possible single edits of a word.
    fn generate_edits(word: &str) -> HashSet<String> {
        let mut edits = HashSet::new();
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();

        // Deletions
        for i in 0..len {
            let mut new_word = chars.clone();
            new_word.remove(i);
            edits.insert(new_word.into_iter().collect());
        }

        // Transpositions (swapping adjacent characters)
        for i in 0..len.saturating_sub(1) {
            let mut new_word = chars.clone();
            new_word.swap(i, i + 1);
            edits.insert(new_word.into_iter().collect());
        }

        // Replacements
        for i in 0..len {
            for ch in 'a'..='z' {
                if ch != chars[i] {
                    let mut new_word = chars.clone();
                    new_word[i] = ch;
                    edits.insert(new_word.into_iter().collect());
                }
            }
        }

        // Insertions
        for i in 0..=len {
            for ch in 'a'..='z' {
                let mut new_word = chars.clone();
                new_word.insert(i, ch);
                edits.insert(new_word.into_iter().collect());
            }
        }

        edits
    }
}

impl DictionaryOracle for SuggestionEngine {
    fn ensure_available(&self) -> Result<()> {
        if self.dictionary.is_empty() {
            return Err(SpellReportError::dictionary("dictionary holds no words"));
        }
        Ok(())
    }

    fn unknown(&self, words: &BTreeSet<String>) -> Result<BTreeSet<String>> {
        self.ensure_available()?;
        let unknown: BTreeSet<String> = words
            .iter()
            .filter(|word| !self.dictionary.contains(word))
            .cloned()
            .collect();
        debug!("{} of {} words unknown", unknown.len(), words.len());
        Ok(unknown)
    }

    fn correction(&self, word: &str) -> Result<Option<String>> {
        self.ensure_available()?;
        Ok(self.best(word))
    }
}
