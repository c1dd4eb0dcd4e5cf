//! ZIP packaging of per-document reports.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use chrono::NaiveDateTime;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{Result, SpellReportError};

/// Suffix appended to a source file name to form its report entry names.
pub const RESULT_SUFFIX: &str = "_result";

/// Name of the CSV entry for a source file.
pub fn csv_entry_name(source: &str) -> String {
    format!("{source}{RESULT_SUFFIX}.csv")
}

/// Name of the PDF entry for a source file.
pub fn pdf_entry_name(source: &str) -> String {
    format!("{source}{RESULT_SUFFIX}.pdf")
}

/// File name of the archive produced at `generated_at`.
///
/// ```
/// use chrono::NaiveDate;
/// use spellreport::archive::archive_name;
///
/// let at = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(9, 5, 0).unwrap();
/// assert_eq!(archive_name(at), "spelling_report_20261018_090500.zip");
/// ```
pub fn archive_name(generated_at: NaiveDateTime) -> String {
    format!("spelling_report_{}.zip", generated_at.format("%Y%m%d_%H%M%S"))
}

/// Make source names unique by suffixing repeats with ` (2)`, ` (3)`, ...
pub fn dedupe_names<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut taken = HashSet::new();
    names
        .into_iter()
        .map(|name| {
            let mut candidate = name.to_string();
            let mut n = 2;
            while !taken.insert(candidate.clone()) {
                candidate = format!("{name} ({n})");
                n += 1;
            }
            candidate
        })
        .collect()
}

/// In-memory ZIP archive sink accepting `(entry name, bytes)` pairs.
pub struct ArchiveWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    entries: usize,
}

impl ArchiveWriter {
    /// Start an empty archive.
    pub fn new() -> Self {
        ArchiveWriter {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            entries: 0,
        }
    }

    /// Add a deflated entry.
    pub fn add(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip
            .start_file(name, options)
            .map_err(|e| SpellReportError::archive(format!("cannot add {name}: {e}")))?;
        self.zip.write_all(bytes)?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Whether no entries were written.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Finish the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.zip.finish()?.into_inner())
    }
}

impl Default for ArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}
