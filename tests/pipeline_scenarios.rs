use std::cell::Cell;
use std::collections::{BTreeSet, HashMap};
use std::io::{Cursor, Read};

use chrono::{NaiveDate, NaiveDateTime};
use lopdf::Object;
use lopdf::content::Content;
use zip::ZipArchive;

use spellreport::error::{Result, SpellReportError};
use spellreport::report::PageLayout;
use spellreport::{
    BuiltinDictionary, DictionaryOracle, InputDocument, ReportConfig, SuggestionEngine, run_batch,
};

/// Oracle answering from a fixed table, counting non-empty batch lookups.
struct TableOracle {
    suggestions: HashMap<String, String>,
    batch_calls: Cell<usize>,
}

impl TableOracle {
    fn new(entries: &[(&str, &str)]) -> Self {
        TableOracle {
            suggestions: entries
                .iter()
                .map(|(w, s)| (w.to_string(), s.to_string()))
                .collect(),
            batch_calls: Cell::new(0),
        }
    }
}

impl DictionaryOracle for TableOracle {
    fn unknown(&self, words: &BTreeSet<String>) -> Result<BTreeSet<String>> {
        if !words.is_empty() {
            self.batch_calls.set(self.batch_calls.get() + 1);
        }
        Ok(words
            .iter()
            .filter(|w| self.suggestions.contains_key(*w))
            .cloned()
            .collect())
    }

    fn correction(&self, word: &str) -> Result<Option<String>> {
        Ok(self.suggestions.get(word).cloned())
    }
}

/// Oracle whose frequency data never loaded.
struct UnavailableOracle;

impl DictionaryOracle for UnavailableOracle {
    fn unknown(&self, _words: &BTreeSet<String>) -> Result<BTreeSet<String>> {
        Err(SpellReportError::dictionary("frequency data unavailable"))
    }

    fn correction(&self, _word: &str) -> Result<Option<String>> {
        Err(SpellReportError::dictionary("frequency data unavailable"))
    }
}

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(15, 9, 26)
        .unwrap()
}

fn pdf_text(bytes: &[u8]) -> Vec<String> {
    let doc = lopdf::Document::load_mem(bytes).unwrap();
    let mut text = Vec::new();
    for id in doc.get_pages().values() {
        let data = doc.get_page_content(*id).unwrap();
        for op in Content::decode(&data).unwrap().operations {
            if op.operator != "Tj" {
                continue;
            }
            if let Some(Object::String(bytes, _)) = op.operands.first() {
                text.push(String::from_utf8_lossy(bytes).into_owned());
            }
        }
    }
    text
}

fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
    let mut content = Vec::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_end(&mut content)
        .unwrap();
    content
}

#[test]
fn reference_document_produces_csv_and_pdf() -> Result<()> {
    let oracle = TableOracle::new(&[("teh", "the"), ("qick", "quick")]);
    let documents = vec![InputDocument::new(
        "fox.txt",
        "Teh qick fox jumps over teh lazy dog NASA OK ok",
    )];

    let batch = run_batch(&documents, &oracle, generated_at(), &PageLayout::a4())?;
    assert_eq!(oracle.batch_calls.get(), 1);

    let report = &batch.documents[0];
    assert_eq!(report.analysis.total_words, 11);
    assert_eq!(report.analysis.error_count, 3);

    let csv = String::from_utf8(report.csv.clone()).unwrap();
    assert_eq!(
        csv,
        "misspelled word,suggested correction\r\n\
         Teh,the\r\n\
         qick,quick\r\n\
         teh,the\r\n\
         \r\n\
         total words,11\r\n\
         error count,3\r\n"
    );

    let text = pdf_text(&report.pdf);
    assert!(text.contains(&"Generated: 2026-03-14 15:09:26".to_string()));
    assert!(text.contains(&"Total words: 11".to_string()));
    assert!(text.contains(&"Error count: 3".to_string()));
    assert!(text.contains(&"Teh ".to_string()));
    assert!(text.contains(&" quick".to_string()));
    Ok(())
}

#[test]
fn empty_document_reports_no_errors() -> Result<()> {
    let documents = vec![InputDocument::new("empty.txt", "")];
    let oracle = TableOracle::new(&[]);
    let batch = run_batch(&documents, &oracle, generated_at(), &PageLayout::a4())?;

    let report = &batch.documents[0];
    assert!(report.analysis.is_clean());
    assert_eq!(report.analysis.total_words, 0);
    assert_eq!(
        String::from_utf8(report.csv.clone()).unwrap(),
        "misspelled word,suggested correction\r\n\r\ntotal words,0\r\nerror count,0\r\n"
    );
    assert_eq!(pdf_text(&report.pdf).last().map(String::as_str), Some("(no errors)"));
    Ok(())
}

#[test]
fn archive_holds_two_entries_per_document() -> Result<()> {
    let engine = SuggestionEngine::new(BuiltinDictionary::english());
    let documents = vec![
        InputDocument::new("one.txt", "Teh qick brown fox"),
        InputDocument::new("two.txt", b"hello \xff\xfeworld".to_vec()),
        InputDocument::new("one.txt", "jumps over teh lazy dog"),
    ];

    let batch = run_batch(&documents, &engine, generated_at(), &PageLayout::a4())?;
    assert_eq!(batch.archive_name(), "spelling_report_20260314_150926.zip");
    assert!(batch.documents[1].analysis.is_clean());

    let mut archive = ZipArchive::new(Cursor::new(batch.to_archive()?))?;
    assert_eq!(archive.len(), 6);
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "one.txt_result.csv",
            "one.txt_result.pdf",
            "two.txt_result.csv",
            "two.txt_result.pdf",
            "one.txt (2)_result.csv",
            "one.txt (2)_result.pdf",
        ]
    );

    let csv = read_entry(&mut archive, "one.txt_result.csv");
    assert_eq!(csv, batch.documents[0].csv);
    let pdf = read_entry(&mut archive, "one.txt (2)_result.pdf");
    assert!(pdf.starts_with(b"%PDF-"));
    Ok(())
}

#[test]
fn unavailable_dictionary_aborts_the_batch() {
    let documents = vec![
        InputDocument::new("a.txt", ""),
        InputDocument::new("b.txt", "words to check"),
    ];
    let err = run_batch(&documents, UnavailableOracle, generated_at(), &PageLayout::a4())
        .unwrap_err();
    assert!(err.is_dictionary_unavailable());
}

#[test]
fn unavailable_dictionary_aborts_batches_without_candidates() {
    let documents = vec![
        InputDocument::new("empty.txt", ""),
        InputDocument::new("numbers.txt", "42 17 OK NASA"),
    ];
    let err = run_batch(&documents, UnavailableOracle, generated_at(), &PageLayout::a4())
        .unwrap_err();
    assert!(err.is_dictionary_unavailable());
}

#[test]
fn ordinary_english_has_no_corrections() -> Result<()> {
    let engine = ReportConfig::default().build_engine()?;
    let documents = vec![InputDocument::new(
        "ordinary.txt",
        "The children were running to different beautiful gardens and walked home \
         happily. She said that the weather was quite pleasant yesterday, although \
         several people complained about traffic in the city.",
    )];

    let batch = run_batch(&documents, &engine, generated_at(), &PageLayout::a4())?;
    let analysis = &batch.documents[0].analysis;
    assert!(analysis.is_clean(), "{:?}", analysis.corrections);
    assert_eq!(analysis.error_count, 0);
    assert_eq!(analysis.total_words, 30);
    Ok(())
}

#[test]
fn long_junk_tokens_get_no_suggestion() -> Result<()> {
    let engine = ReportConfig::default().build_engine()?;
    let junk = "zqxjkvbw".repeat(5);
    let documents = vec![InputDocument::new("junk.txt", format!("see {junk} now"))];

    let batch = run_batch(&documents, &engine, generated_at(), &PageLayout::a4())?;
    let analysis = &batch.documents[0].analysis;
    assert_eq!(analysis.error_count, 1);
    assert_eq!(analysis.corrections[junk.as_str()], junk);
    Ok(())
}

#[test]
fn empty_batch_is_rejected() {
    let engine = SuggestionEngine::new(BuiltinDictionary::minimal());
    let err = run_batch(&[], &engine, generated_at(), &PageLayout::a4()).unwrap_err();
    assert!(matches!(err, SpellReportError::NoInput(_)));
}

#[test]
fn rerunning_a_batch_is_byte_identical() -> Result<()> {
    let engine = SuggestionEngine::new(BuiltinDictionary::english());
    let documents = vec![InputDocument::new(
        "essay.txt",
        "Thsi essay has sevral erors, teh end.",
    )];

    let first = run_batch(&documents, &engine, generated_at(), &PageLayout::a4())?;
    let second = run_batch(&documents, &engine, generated_at(), &PageLayout::a4())?;
    for (a, b) in first.documents.iter().zip(&second.documents) {
        assert_eq!(a.analysis, b.analysis);
        assert_eq!(a.csv, b.csv);
        assert_eq!(a.pdf, b.pdf);
    }
    Ok(())
}

#[test]
fn long_reports_span_several_pages() -> Result<()> {
    let words: Vec<String> = (0..60)
        .map(|i| format!("zzq{}{}", "x".repeat(i % 7 + 1), "y".repeat(i / 7)))
        .collect();
    let mut entries: Vec<(&str, &str)> = Vec::new();
    for word in &words {
        entries.push((word.as_str(), "fix"));
    }
    let oracle = TableOracle::new(&entries);
    let documents = vec![InputDocument::new("long.txt", words.join(" "))];

    let batch = run_batch(&documents, &oracle, generated_at(), &PageLayout::a4())?;
    assert_eq!(batch.documents[0].analysis.corrections.len(), 60);

    let doc = lopdf::Document::load_mem(&batch.documents[0].pdf)?;
    assert_eq!(doc.get_pages().len(), 2);
    Ok(())
}
