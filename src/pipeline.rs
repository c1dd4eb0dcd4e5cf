//! Batch entry point: documents in, reports and archive out.
//!
//! Documents are processed strictly one after another; the only thing shared
//! between them is the read-only dictionary oracle.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use log::{debug, info};
use serde::Serialize;

use crate::analysis::decode::decode_lenient;
use crate::archive::{ArchiveWriter, archive_name, csv_entry_name, dedupe_names, pdf_entry_name};
use crate::error::{Result, SpellReportError};
use crate::report::pdf::{PageLayout, render_pdf};
use crate::report::table::render_csv;
use crate::spelling::analyzer::{AnalysisResult, SpellingAnalyzer};
use crate::spelling::oracle::DictionaryOracle;

/// An uploaded file: its name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    /// File name used to derive the report entry names.
    pub name: String,
    /// Raw contents; decoded leniently as UTF-8.
    pub bytes: Vec<u8>,
}

impl InputDocument {
    /// Create a document from a name and its contents.
    pub fn new<S: Into<String>, B: Into<Vec<u8>>>(name: S, bytes: B) -> Self {
        InputDocument {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a document from disk, naming it after the file name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                SpellReportError::invalid_argument(format!("{} has no file name", path.display()))
            })?;
        let bytes = fs::read(path)?;
        Ok(InputDocument { name, bytes })
    }
}

/// Reports produced for one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Unique name within the batch.
    pub name: String,
    /// Spelling analysis of the document.
    pub analysis: AnalysisResult,
    /// CSV report bytes.
    #[serde(skip)]
    pub csv: Vec<u8>,
    /// PDF report bytes.
    #[serde(skip)]
    pub pdf: Vec<u8>,
}

impl DocumentReport {
    /// Archive entry name of the CSV report.
    pub fn csv_entry(&self) -> String {
        csv_entry_name(&self.name)
    }

    /// Archive entry name of the PDF report.
    pub fn pdf_entry(&self) -> String {
        pdf_entry_name(&self.name)
    }
}

/// Reports for a whole batch, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Timestamp shown in every report and embedded in the archive name.
    pub generated_at: NaiveDateTime,
    /// One report per input document.
    pub documents: Vec<DocumentReport>,
}

impl BatchReport {
    /// File name of the archive for this batch.
    pub fn archive_name(&self) -> String {
        archive_name(self.generated_at)
    }

    /// Package every report into a ZIP archive.
    pub fn to_archive(&self) -> Result<Vec<u8>> {
        let mut writer = ArchiveWriter::new();
        for document in &self.documents {
            writer.add(&document.csv_entry(), &document.csv)?;
            writer.add(&document.pdf_entry(), &document.pdf)?;
        }
        writer.finish()
    }

    /// Sum of flagged occurrences over all documents.
    pub fn total_errors(&self) -> usize {
        self.documents.iter().map(|d| d.analysis.error_count).sum()
    }
}

/// Spell check every document and render its reports.
///
/// Fails with [`SpellReportError::NoInput`] when `documents` is empty, and
/// with the oracle's error when it is unavailable up front or as soon as any
/// lookup fails; no partial batch is returned in either case.
pub fn run_batch<O: DictionaryOracle>(
    documents: &[InputDocument],
    oracle: O,
    generated_at: NaiveDateTime,
    layout: &PageLayout,
) -> Result<BatchReport> {
    if documents.is_empty() {
        return Err(SpellReportError::no_input(
            "at least one text document is required",
        ));
    }
    layout.validate()?;
    oracle.ensure_available()?;

    let analyzer = SpellingAnalyzer::new(oracle);
    let names = dedupe_names(documents.iter().map(|d| d.name.as_str()));
    let mut reports = Vec::with_capacity(documents.len());

    for (index, (document, name)) in documents.iter().zip(names).enumerate() {
        debug!(
            "[{}/{}] checking {} ({} bytes)",
            index + 1,
            documents.len(),
            name,
            document.bytes.len()
        );
        let text = decode_lenient(&document.bytes);
        let analysis = analyzer.analyze_text(&text)?;
        let csv = render_csv(&analysis)?;
        let pdf = render_pdf(&analysis, generated_at, layout)?;
        debug!(
            "{}: {} words, {} errors, {} distinct",
            name,
            analysis.total_words,
            analysis.error_count,
            analysis.corrections.len()
        );

        reports.push(DocumentReport {
            name,
            analysis,
            csv,
            pdf,
        });
    }

    let batch = BatchReport {
        generated_at,
        documents: reports,
    };
    info!(
        "checked {} documents, {} errors",
        batch.documents.len(),
        batch.total_errors()
    );
    Ok(batch)
}
