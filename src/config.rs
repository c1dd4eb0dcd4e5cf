//! Configuration for spellreport.
//!
//! Configuration is read from a JSON file; every key is optional and falls
//! back to its default.
//!
//! ```json
//! {
//!   "dictionary": "/usr/share/spellreport/en_frequency.txt",
//!   "min_frequency": 1,
//!   "suggestion": { "max_distance": 2, "max_suggestions": 5 },
//!   "layout": { "margin_bottom": 60.0 },
//!   "extensions": ["txt"]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellReportError};
use crate::report::pdf::PageLayout;
use crate::spelling::dictionary::{BuiltinDictionary, SpellingDictionary};
use crate::spelling::suggest::{SuggestionConfig, SuggestionEngine};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Word-frequency or word-list file; the bundled English list when absent.
    pub dictionary: Option<PathBuf>,
    /// Words below this frequency are dropped from the dictionary.
    pub min_frequency: u64,
    /// Suggestion engine settings.
    pub suggestion: SuggestionConfig,
    /// PDF page geometry.
    pub layout: PageLayout,
    /// File extensions picked up when a directory is given as input.
    pub extensions: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            dictionary: None,
            min_frequency: 1,
            suggestion: SuggestionConfig::default(),
            layout: PageLayout::default(),
            extensions: vec!["txt".to_string()],
        }
    }
}

impl ReportConfig {
    /// Load and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SpellReportError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: ReportConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check every section for usable values.
    pub fn validate(&self) -> Result<()> {
        self.suggestion.validate()?;
        self.layout.validate()?;
        if self.extensions.iter().any(|ext| ext.trim().is_empty()) {
            return Err(SpellReportError::invalid_config(
                "extensions must not contain empty entries",
            ));
        }
        Ok(())
    }

    /// Whether a file should be picked up from a directory listing.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }

    /// Load the configured dictionary and prune it.
    pub fn load_dictionary(&self) -> Result<SpellingDictionary> {
        let mut dictionary = match &self.dictionary {
            Some(path) => SpellingDictionary::load(path)?,
            None => BuiltinDictionary::english(),
        };
        if self.min_frequency > 1 {
            dictionary.prune_low_frequency(self.min_frequency);
        }
        if dictionary.is_empty() {
            return Err(SpellReportError::dictionary(format!(
                "no words left at minimum frequency {}",
                self.min_frequency
            )));
        }
        Ok(dictionary)
    }

    /// Build the suggestion engine used as the dictionary oracle.
    pub fn build_engine(&self) -> Result<SuggestionEngine> {
        self.validate()?;
        let engine = SuggestionEngine::with_config(self.load_dictionary()?, self.suggestion.clone());
        let (words, total) = engine.dictionary_stats();
        debug!("dictionary ready: {words} words, total frequency {total}");
        Ok(engine)
    }
}
