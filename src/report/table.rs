//! CSV rendering of an analysis.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::spelling::analyzer::AnalysisResult;

/// Header row of the corrections table.
pub const HEADER: [&str; 2] = ["misspelled word", "suggested correction"];
/// Label of the total word count summary row.
pub const TOTAL_WORDS_LABEL: &str = "total words";
/// Label of the error count summary row.
pub const ERROR_COUNT_LABEL: &str = "error count";

/// Render the corrections table followed by a blank row and the summary rows.
///
/// ```
/// use spellreport::report::table::render_csv;
/// use spellreport::spelling::AnalysisResult;
///
/// let mut result = AnalysisResult::default();
/// result.corrections.insert("Teh".into(), "the".into());
/// result.total_words = 3;
/// result.error_count = 1;
///
/// let csv = String::from_utf8(render_csv(&result).unwrap()).unwrap();
/// assert_eq!(
///     csv,
///     "misspelled word,suggested correction\r\nTeh,the\r\n\r\ntotal words,3\r\nerror count,1\r\n"
/// );
/// ```
pub fn render_csv(result: &AnalysisResult) -> Result<Vec<u8>> {
    let mut buf = Vec::new();

    {
        let mut writer = builder().from_writer(&mut buf);
        writer.write_record(HEADER)?;
        for (wrong, correct) in &result.corrections {
            writer.write_record([wrong, correct])?;
        }
        writer.flush()?;
    }

    // blank separator row
    buf.extend_from_slice(b"\r\n");

    {
        let mut writer = builder().from_writer(&mut buf);
        writer.write_record([TOTAL_WORDS_LABEL, result.total_words.to_string().as_str()])?;
        writer.write_record([ERROR_COUNT_LABEL, result.error_count.to_string().as_str()])?;
        writer.flush()?;
    }

    Ok(buf)
}

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .has_headers(false);
    builder
}
