//! Word-frequency dictionary backing the spell checker.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::debug;

use crate::error::{Result, SpellReportError};

/// Bundled English word list in `word frequency` format.
const ENGLISH_FREQUENCY_LIST: &str = include_str!("../../data/en_frequency.txt");

/// A dictionary that stores lower-cased words and their frequencies.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    /// Words and their frequencies
    words: HashMap<String, u64>,
    /// Sum of all frequencies
    total_count: u64,
    /// Length in characters of the longest word
    longest_word: usize,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary::default()
    }

    /// Add a word to the dictionary with the given frequency.
    pub fn add_word(&mut self, word: &str, frequency: u64) {
        let normalized = word.to_lowercase();
        self.longest_word = self.longest_word.max(normalized.chars().count());
        let old_freq = self.words.insert(normalized, frequency).unwrap_or(0);
        self.total_count = self.total_count - old_freq + frequency;
    }

    /// Increment the frequency of a word by 1.
    pub fn increment_word(&mut self, word: &str) {
        let current = self.frequency(word);
        self.add_word(word, current.saturating_add(1));
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the frequency of a word.
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Get the total number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total frequency count.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }

    /// Length in characters of the longest word, 0 when empty.
    pub fn longest_word_length(&self) -> usize {
        self.longest_word
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Load dictionary from a text file with one word per line.
    ///
    /// Repeated lines raise the word's frequency.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = open(path)?;
        let mut dictionary = SpellingDictionary::new();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() && word.chars().all(|c| c.is_alphabetic()) {
                dictionary.increment_word(word);
            }
        }

        dictionary.ensure_usable(&path.display().to_string())?;
        Ok(dictionary)
    }

    /// Load dictionary from a frequency file with format "word frequency" per line.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = open(path)?;
        let mut dictionary = SpellingDictionary::new();

        for line in reader.lines() {
            dictionary.add_frequency_line(&line?);
        }

        dictionary.ensure_usable(&path.display().to_string())?;
        Ok(dictionary)
    }

    /// Load a dictionary file, picking the format from its first line.
    ///
    /// Lines of the form `word 123` select the frequency format; anything
    /// else is read as a plain word list.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut first_line = String::new();
        open(path)?.read_line(&mut first_line)?;

        let mut parts = first_line.split_whitespace();
        let frequency_format = matches!(
            (parts.next(), parts.next()),
            (Some(_), Some(count)) if count.parse::<u64>().is_ok()
        );

        debug!(
            "loading dictionary {} as {}",
            path.display(),
            if frequency_format { "frequency list" } else { "word list" }
        );

        if frequency_format {
            Self::load_from_frequency_file(path)
        } else {
            Self::load_from_file(path)
        }
    }

    /// Create a dictionary from a corpus of text.
    pub fn from_corpus(text: &str) -> Self {
        let mut dictionary = SpellingDictionary::new();

        let words = text
            .split(|c: char| !c.is_alphabetic())
            .filter(|word| word.len() > 1);

        for word in words {
            dictionary.increment_word(word);
        }

        dictionary
    }

    /// Remove words with frequency below the threshold.
    pub fn prune_low_frequency(&mut self, min_frequency: u64) {
        let before = self.words.len();
        self.words.retain(|_, freq| *freq >= min_frequency);
        self.total_count = self.words.values().sum();
        self.longest_word = self
            .words
            .keys()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0);
        debug!(
            "pruned {} words below frequency {}",
            before - self.words.len(),
            min_frequency
        );
    }

    /// Save dictionary to a frequency file, most frequent words first.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        let mut word_freq: Vec<(&String, &u64)> = self.words.iter().collect();
        word_freq.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (word, frequency) in word_freq {
            writeln!(file, "{word} {frequency}")?;
        }

        Ok(())
    }

    fn add_frequency_line(&mut self, line: &str) {
        let mut parts = line.split_whitespace();
        if let (Some(word), Some(count)) = (parts.next(), parts.next())
            && let Ok(frequency) = count.parse::<u64>()
            && word.chars().all(|c| c.is_alphabetic())
        {
            self.add_word(word, frequency);
        }
    }

    fn ensure_usable(&self, source: &str) -> Result<()> {
        if self.is_empty() {
            return Err(SpellReportError::dictionary(format!(
                "no usable words in {source}"
            )));
        }
        Ok(())
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        SpellReportError::dictionary(format!("cannot open {}: {e}", path.display()))
    })?;
    Ok(BufReader::new(file))
}

/// Dictionaries that ship with the crate.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// English word list with corpus frequencies (82,765 words).
    pub fn english() -> SpellingDictionary {
        let mut dict = SpellingDictionary::new();
        for line in ENGLISH_FREQUENCY_LIST.lines() {
            dict.add_frequency_line(line);
        }
        dict
    }

    /// Create a minimal dictionary for testing.
    pub fn minimal() -> SpellingDictionary {
        let mut dict = SpellingDictionary::new();

        let words = [
            ("the", 500),
            ("quick", 120),
            ("brown", 110),
            ("fox", 100),
            ("jumps", 100),
            ("over", 300),
            ("lazy", 100),
            ("dog", 150),
            ("hello", 100),
            ("world", 100),
            ("spell", 100),
            ("correct", 100),
            ("word", 100),
            ("words", 90),
            ("text", 100),
            ("report", 100),
        ];

        for (word, frequency) in words {
            dict.add_word(word, frequency);
        }

        dict
    }
}
