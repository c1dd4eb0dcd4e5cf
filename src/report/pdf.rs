//! Paginated PDF rendering of an analysis.
//!
//! The document is drawn line by line with a vertical cursor. Before each
//! line the cursor is checked against the bottom margin; when it has crossed
//! it a new page is started, the cursor returns to the top margin and the
//! current font is selected again on the fresh page.

use chrono::NaiveDateTime;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellReportError};
use crate::spelling::analyzer::AnalysisResult;

/// Document title drawn at the top of the first page.
pub const TITLE: &str = "Spelling Check Report";
/// Line drawn in place of the list when nothing was flagged.
pub const NO_ERRORS: &str = "(no errors)";
/// Timestamp format used on the report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `arrowright` in the Symbol font's built-in encoding.
const SYMBOL_ARROW: u8 = 0xAE;

/// Page geometry in PDF points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Page width.
    pub width: f32,
    /// Page height.
    pub height: f32,
    /// X position of the title and summary blocks.
    pub margin_left: f32,
    /// X position of correction list lines.
    pub list_indent: f32,
    /// Distance from the page top to the first baseline.
    pub margin_top: f32,
    /// Lowest baseline allowed before a page break.
    pub margin_bottom: f32,
    /// Vertical advance between correction list lines.
    pub line_height: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout::a4()
    }
}

impl PageLayout {
    /// A4 portrait with 50pt margins.
    pub fn a4() -> Self {
        PageLayout {
            width: 595.2756,
            height: 841.8898,
            margin_left: 50.0,
            list_indent: 60.0,
            margin_top: 50.0,
            margin_bottom: 50.0,
            line_height: 20.0,
        }
    }

    /// Baseline of the first line on every page.
    pub fn top(&self) -> f32 {
        self.height - self.margin_top
    }

    /// Check that the geometry leaves room for at least one line per page.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SpellReportError::invalid_config(
                "page width and height must be positive",
            ));
        }
        if self.line_height <= 0.0 {
            return Err(SpellReportError::invalid_config(
                "line_height must be positive",
            ));
        }
        if self.margin_bottom < 0.0 || self.top() <= self.margin_bottom {
            return Err(SpellReportError::invalid_config(
                "top and bottom margins leave no room on the page",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Font {
    Regular,
    Bold,
    Symbol,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Symbol => "F3",
        }
    }
}

/// Accumulates drawing operations page by page.
struct PageWriter<'a> {
    layout: &'a PageLayout,
    pages: Vec<Vec<Operation>>,
    operations: Vec<Operation>,
    font: Option<(Font, f32)>,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(layout: &'a PageLayout) -> Self {
        PageWriter {
            layout,
            pages: Vec::new(),
            operations: Vec::new(),
            font: None,
            y: layout.top(),
        }
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.operations);
        self.pages.push(finished);
        self.y = self.layout.top();
        // fonts do not carry over to a new page
        self.font = None;
    }

    fn set_font(&mut self, font: Font, size: f32) {
        if self.font == Some((font, size)) {
            return;
        }
        self.operations.push(Operation::new(
            "Tf",
            vec![font.resource().into(), size.into()],
        ));
        self.font = Some((font, size));
    }

    fn begin_line(&mut self, x: f32, font: Font, size: f32) {
        if self.y < self.layout.margin_bottom {
            self.new_page();
        }
        self.operations.push(Operation::new("BT", vec![]));
        self.set_font(font, size);
        self.operations
            .push(Operation::new("Td", vec![x.into(), self.y.into()]));
    }

    fn show(&mut self, bytes: Vec<u8>) {
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(bytes, StringFormat::Hexadecimal)],
        ));
    }

    fn end_line(&mut self, advance: f32) {
        self.operations.push(Operation::new("ET", vec![]));
        self.y -= advance;
    }

    fn text(&mut self, x: f32, font: Font, size: f32, text: &str, advance: f32) {
        self.begin_line(x, font, size);
        self.show(win_ansi(text));
        self.end_line(advance);
    }

    /// Draw `wrong → right`, taking the arrow glyph from the Symbol font.
    fn correction(&mut self, x: f32, size: f32, wrong: &str, right: &str, advance: f32) {
        self.begin_line(x, Font::Regular, size);
        self.show(win_ansi(&format!("{wrong} ")));
        self.set_font(Font::Symbol, size);
        self.show(vec![SYMBOL_ARROW]);
        self.set_font(Font::Regular, size);
        self.show(win_ansi(&format!(" {right}")));
        self.end_line(advance);
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        self.new_page();
        self.pages
    }
}

/// Render the analysis as a PDF document.
///
/// The layout is: title, generation timestamp, summary block (total words,
/// error count), then one `misspelled → suggestion` line per correction or
/// a single `(no errors)` line.
pub fn render_pdf(
    result: &AnalysisResult,
    generated_at: NaiveDateTime,
    layout: &PageLayout,
) -> Result<Vec<u8>> {
    layout.validate()?;

    let mut writer = PageWriter::new(layout);
    let left = layout.margin_left;
    let timestamp = generated_at.format(TIMESTAMP_FORMAT).to_string();

    writer.text(left, Font::Bold, 16.0, TITLE, 20.0);
    writer.text(
        left,
        Font::Regular,
        10.0,
        &format!("Generated: {timestamp}"),
        20.0,
    );
    writer.text(
        left,
        Font::Regular,
        12.0,
        &format!("Total words: {}", result.total_words),
        20.0,
    );
    writer.text(
        left,
        Font::Regular,
        12.0,
        &format!("Error count: {}", result.error_count),
        40.0,
    );
    writer.text(left, Font::Bold, 14.0, "Misspelled words:", 30.0);

    if result.corrections.is_empty() {
        writer.text(
            layout.list_indent,
            Font::Regular,
            11.0,
            NO_ERRORS,
            layout.line_height,
        );
    } else {
        for (wrong, right) in &result.corrections {
            writer.correction(layout.list_indent, 11.0, wrong, right, layout.line_height);
        }
    }

    let pages = writer.finish();
    build_document(pages, layout, generated_at)
}

fn build_document(
    pages: Vec<Vec<Operation>>,
    layout: &PageLayout,
    generated_at: NaiveDateTime,
) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let symbol_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Symbol",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            Font::Regular.resource() => regular_id,
            Font::Bold.resource() => bold_id,
            Font::Symbol.resource() => symbol_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_count),
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            layout.width.into(),
            layout.height.into(),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(TITLE),
        "Producer" => Object::string_literal(concat!("spellreport ", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(generated_at.format("D:%Y%m%d%H%M%S").to_string()),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf)?;
    Ok(buf)
}

/// Encode text for the WinAnsi-encoded standard fonts.
///
/// Characters the encoding cannot represent become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '\t' => b' ',
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8a,
            '‹' => 0x8b,
            'Œ' => 0x8c,
            'Ž' => 0x8e,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9a,
            '›' => 0x9b,
            'œ' => 0x9c,
            'ž' => 0x9e,
            'Ÿ' => 0x9f,
            _ => b'?',
        })
        .collect()
}
