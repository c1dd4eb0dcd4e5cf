//! Spell checking for spellreport.
//!
//! This module provides the word-frequency dictionary, the suggestion engine
//! that ranks replacement words, the [`oracle::DictionaryOracle`] capability
//! the analyzer is written against, and the [`analyzer::SpellingAnalyzer`]
//! that turns a token sequence into an [`analyzer::AnalysisResult`].

pub mod analyzer;
pub mod dictionary;
pub mod levenshtein;
pub mod oracle;
pub mod suggest;

// Re-export commonly used types
pub use analyzer::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use oracle::*;
pub use suggest::*;
