//! Output formatting for CLI commands.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellReportArgs};
use crate::error::Result;
use crate::pipeline::BatchReport;
use crate::spelling::analyzer::Corrections;
use crate::spelling::suggest::Suggestion;

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckSummary {
    pub archive: String,
    pub documents: Vec<DocumentSummary>,
    pub total_errors: usize,
    pub duration_ms: u64,
}

/// Per-document part of a [`CheckSummary`].
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub name: String,
    pub total_words: usize,
    pub error_count: usize,
    pub distinct_errors: usize,
    pub corrections: Corrections,
}

impl CheckSummary {
    /// Summarize a finished batch written to `archive`.
    pub fn from_batch(batch: &BatchReport, archive: String, duration_ms: u64) -> Self {
        CheckSummary {
            archive,
            documents: batch
                .documents
                .iter()
                .map(|document| DocumentSummary {
                    name: document.name.clone(),
                    total_words: document.analysis.total_words,
                    error_count: document.analysis.error_count,
                    distinct_errors: document.analysis.corrections.len(),
                    corrections: document.analysis.corrections.clone(),
                })
                .collect(),
            total_errors: batch.total_errors(),
            duration_ms,
        }
    }
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub dictionary_words: usize,
    pub dictionary_frequency: u64,
    pub words: Vec<WordSuggestions>,
}

/// Suggestions for one looked-up word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordSuggestions {
    pub word: String,
    pub known: bool,
    pub suggestions: Vec<Suggestion>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

impl HumanOutput for CheckSummary {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Spelling Report:");
        let _ = writeln!(out, "════════════════");

        for document in &self.documents {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", document.name);
            let _ = writeln!(out, "─────────────");
            let _ = writeln!(out, "Total words: {}", document.total_words);
            let _ = writeln!(out, "Error count: {}", document.error_count);
            let _ = writeln!(out, "Distinct misspellings: {}", document.distinct_errors);
            for (wrong, right) in &document.corrections {
                let _ = writeln!(out, "  {wrong} -> {right}");
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Total errors: {}", self.total_errors);
        let _ = writeln!(out, "Archive: {}", self.archive);
        let _ = writeln!(out, "Time: {}ms", self.duration_ms);
        out
    }
}

impl HumanOutput for SuggestResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Suggestions:");
        let _ = writeln!(out, "════════════");
        let _ = writeln!(
            out,
            "Dictionary: {} words, total frequency {}",
            self.dictionary_words, self.dictionary_frequency
        );

        for entry in &self.words {
            let _ = writeln!(out);
            if entry.known {
                let _ = writeln!(out, "{}: correct", entry.word);
                continue;
            }
            if entry.suggestions.is_empty() {
                let _ = writeln!(out, "{}: no suggestions", entry.word);
                continue;
            }
            let _ = writeln!(out, "{}:", entry.word);
            for suggestion in &entry.suggestions {
                let _ = writeln!(
                    out,
                    "  {} (distance {}, frequency {})",
                    suggestion.word, suggestion.distance, suggestion.frequency
                );
            }
        }
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SpellReportArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &SpellReportArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellReportArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
