//! The dictionary capability the spelling analyzer depends on.

use std::collections::BTreeSet;

use crate::error::Result;

/// Known-word membership and correction lookups.
///
/// Implementations are queried read-only and may be shared across any number
/// of documents. An `Err` from any method means the dictionary is unusable
/// and aborts the whole batch.
pub trait DictionaryOracle {
    /// Fail when the dictionary cannot answer lookups.
    ///
    /// Checked once before a batch starts, so a broken dictionary aborts the
    /// batch even when no document has a word to look up. The default probes
    /// with an empty batch lookup.
    fn ensure_available(&self) -> Result<()> {
        self.unknown(&BTreeSet::new()).map(|_| ())
    }

    /// Return the subset of `words` that the dictionary does not know.
    fn unknown(&self, words: &BTreeSet<String>) -> Result<BTreeSet<String>>;

    /// Best replacement for `word`, or `None` when nothing plausible exists.
    fn correction(&self, word: &str) -> Result<Option<String>>;
}

impl<O: DictionaryOracle + ?Sized> DictionaryOracle for &O {
    fn ensure_available(&self) -> Result<()> {
        (**self).ensure_available()
    }

    fn unknown(&self, words: &BTreeSet<String>) -> Result<BTreeSet<String>> {
        (**self).unknown(words)
    }

    fn correction(&self, word: &str) -> Result<Option<String>> {
        (**self).correction(word)
    }
}

impl<O: DictionaryOracle + ?Sized> DictionaryOracle for Box<O> {
    fn ensure_available(&self) -> Result<()> {
        (**self).ensure_available()
    }

    fn unknown(&self, words: &BTreeSet<String>) -> Result<BTreeSet<String>> {
        (**self).unknown(words)
    }

    fn correction(&self, word: &str) -> Result<Option<String>> {
        (**self).correction(word)
    }
}
