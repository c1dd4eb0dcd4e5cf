//! # spellreport
//!
//! Spell checks English text documents and produces, per document, a CSV and
//! a paginated PDF report listing each misspelled word with a suggested
//! correction, bundled into a single ZIP archive.
//!
//! ## Pipeline
//!
//! - Lenient UTF-8 decoding of the raw bytes
//! - Whitespace tokenization and candidate filtering
//! - One batch lookup against a [`DictionaryOracle`] per document
//! - CSV and PDF rendering
//! - ZIP packaging
//!
//! ```
//! use chrono::NaiveDate;
//! use spellreport::{BuiltinDictionary, InputDocument, PageLayout, SuggestionEngine, run_batch};
//!
//! let engine = SuggestionEngine::new(BuiltinDictionary::english());
//! let at = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
//! let documents = vec![InputDocument::new("essay.txt", "Teh qick brown fox")];
//!
//! let batch = run_batch(&documents, &engine, at, &PageLayout::a4()).unwrap();
//! assert_eq!(batch.documents[0].analysis.corrections["Teh"], "the");
//! assert_eq!(batch.archive_name(), "spelling_report_20260102_030405.zip");
//! ```

pub mod analysis;
pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod spelling;

pub use config::ReportConfig;
pub use error::{Result, SpellReportError};
pub use pipeline::{BatchReport, DocumentReport, InputDocument, run_batch};
pub use report::PageLayout;
pub use spelling::{
    AnalysisResult, BuiltinDictionary, DictionaryOracle, SpellingAnalyzer, SpellingDictionary,
    SuggestionEngine,
};
