//! Paginated narrative document emitter.
//!
//! [`DocumentLayout::build`] narrates the projection into styled lines and
//! places them on pages with no I/O. [`DocumentEmitter`] then encodes the
//! layout as an uncompressed PDF using the base-14 Helvetica fonts.
//!
//! The first session follows the title on page one; every later session
//! starts on a new page. The footer line closes the document.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::domain::export::{
    descriptor, project_all, scalar_text, DisplaySettings, Field, Record, RowLayout, Section,
    SessionProjection, TextStyle, Value, WhenMissing, NO_CONNECTIONS,
};
use crate::ports::{ExportFormat, ExportInput, RenderError, SessionEmitter};

use super::settings::{DocumentStyle, ExportSettings};

const MARGIN: i64 = 50;
const INDENT: i64 = 18;

/// Typographic role of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Subtitle,
    SessionHeading,
    SectionHeading,
    Body,
    Footer,
}

impl LineKind {
    pub fn font_size(&self) -> i64 {
        match self {
            LineKind::Title => 24,
            LineKind::Subtitle => 14,
            LineKind::SessionHeading => 20,
            LineKind::SectionHeading => 18,
            LineKind::Body => 12,
            LineKind::Footer => 10,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            LineKind::Title | LineKind::SessionHeading | LineKind::SectionHeading
        )
    }

    fn is_centered(&self) -> bool {
        matches!(self, LineKind::Title | LineKind::Subtitle | LineKind::Footer)
    }

    fn leading(&self) -> i64 {
        self.font_size() * 6 / 5 + 2
    }

    /// Average glyph width in hundredths of the font size.
    fn glyph_width(&self) -> i64 {
        if self.is_bold() {
            58
        } else {
            52
        }
    }
}

/// Line of narrative before wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NarrativeLine {
    kind: LineKind,
    indent: i64,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Flow {
    Line(NarrativeLine),
    Gap,
    PageBreak,
}

/// A line positioned on a page, in PDF points from the bottom-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub kind: LineKind,
    pub x: i64,
    pub y: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    pub width: i64,
    pub height: i64,
    pub pages: Vec<Page>,
}

impl DocumentLayout {
    pub fn build(input: ExportInput<'_>, style: &DocumentStyle, display: &DisplaySettings) -> Self {
        let projections = project_all(input.sessions());
        let flow = narrate(&projections, style, display);
        let (width, height) = style.page_size.dimensions();
        let mut composer = Composer::new(width, height);
        for item in flow {
            composer.push(item);
        }
        composer.finish()
    }

    /// Every line's text in reading order.
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines().map(|l| l.text.as_str()).collect()
    }

    pub fn texts_of(&self, kind: LineKind) -> Vec<&str> {
        self.lines()
            .filter(|l| l.kind == kind)
            .map(|l| l.text.as_str())
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Narration
// ─────────────────────────────────────────────────────────────────────────

struct Narrator<'a> {
    display: &'a DisplaySettings,
    flow: Vec<Flow>,
}

impl<'a> Narrator<'a> {
    fn line(&mut self, kind: LineKind, indent: i64, text: impl Into<String>) {
        self.flow.push(Flow::Line(NarrativeLine {
            kind,
            indent,
            text: text.into(),
        }));
    }

    fn body(&mut self, indent: i64, text: impl Into<String>) {
        self.line(LineKind::Body, indent, text);
    }

    fn human(&self, value: &Value) -> String {
        scalar_text(value, TextStyle::Human, self.display)
    }

    fn session(&mut self, p: &SessionProjection) {
        self.line(LineKind::SessionHeading, 0, format!("Session {}", p.id));
        self.body(0, format!("Created: {}", self.display.timestamp(&p.created_at)));
        self.body(0, format!("Last Updated: {}", self.display.timestamp(&p.updated_at)));
        self.flow.push(Flow::Gap);

        if p.sections.is_empty() {
            self.body(0, "No assessments completed yet.");
            return;
        }
        for section in &p.sections {
            self.section(section);
            self.flow.push(Flow::Gap);
        }
    }

    fn section(&mut self, section: &Section) {
        self.line(LineKind::SectionHeading, 0, section.title);
        for field in section.fields.iter().filter(|f| f.is_narrative()) {
            self.field(field, 0);
        }
        if descriptor(section.kind).layout == RowLayout::PerItem {
            if section.records.is_empty() {
                self.body(0, "No items");
            }
            for (index, record) in section.records.iter().enumerate() {
                self.record(index + 1, record);
            }
        }
    }

    fn field(&mut self, field: &Field, indent: i64) {
        match &field.value {
            Value::Missing if field.when_missing == WhenMissing::Elide => {}
            Value::List(entries) if entries.is_empty() => {
                if field.when_missing == WhenMissing::Placeholder {
                    self.body(indent, format!("{}: {}", field.label, NO_CONNECTIONS));
                }
            }
            Value::List(entries) => {
                self.body(indent, format!("{}:", field.label));
                for entry in entries {
                    let text = self.human(&entry.value);
                    self.body(indent + 1, format!("\u{2022} {}", text));
                    if let Some(note) = &entry.note {
                        self.body(indent + 2, note.as_str());
                    }
                }
            }
            value => {
                let text = self.human(value);
                self.body(indent, format!("{}: {}", field.label, text));
            }
        }
    }

    /// Records print their first two narrative fields as a numbered
    /// headline and the rest indented beneath it.
    fn record(&mut self, number: usize, record: &Record) {
        let mut fields = record.fields.iter().filter(|f| f.is_narrative());
        let headline = match (fields.next(), fields.next()) {
            (Some(a), Some(b)) => format!("{}. {}: {}", number, self.human(&a.value), self.human(&b.value)),
            (Some(a), None) => format!("{}. {}", number, self.human(&a.value)),
            _ => format!("{}.", number),
        };
        self.body(0, headline);
        for field in fields {
            self.field(field, 1);
        }
    }
}

fn narrate(
    projections: &[SessionProjection],
    style: &DocumentStyle,
    display: &DisplaySettings,
) -> Vec<Flow> {
    let mut narrator = Narrator {
        display,
        flow: Vec::new(),
    };
    narrator.line(LineKind::Title, 0, style.title.as_str());
    narrator.line(LineKind::Subtitle, 0, style.subtitle.as_str());
    narrator.flow.push(Flow::Gap);
    narrator.flow.push(Flow::Gap);

    if projections.is_empty() {
        narrator.body(0, "No sessions to export.");
    }
    for (index, projection) in projections.iter().enumerate() {
        if index > 0 {
            narrator.flow.push(Flow::PageBreak);
        }
        narrator.session(projection);
    }

    narrator.flow.push(Flow::Gap);
    narrator.line(LineKind::Footer, 0, style.footer.as_str());
    narrator.flow
}

// ─────────────────────────────────────────────────────────────────────────
// Wrapping and pagination
// ─────────────────────────────────────────────────────────────────────────

struct Composer {
    width: i64,
    height: i64,
    pages: Vec<Page>,
    current: Page,
    cursor: i64,
}

impl Composer {
    fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            pages: Vec::new(),
            current: Page::default(),
            cursor: height - MARGIN,
        }
    }

    fn push(&mut self, item: Flow) {
        match item {
            Flow::Line(line) => self.place(line),
            Flow::Gap => {
                if !self.current.lines.is_empty() {
                    self.cursor -= LineKind::Body.leading();
                }
            }
            Flow::PageBreak => {
                if !self.current.lines.is_empty() {
                    self.new_page();
                }
            }
        }
    }

    fn new_page(&mut self) {
        let done = std::mem::take(&mut self.current);
        self.pages.push(done);
        self.cursor = self.height - MARGIN;
    }

    fn max_chars(&self, kind: LineKind, indent: i64) -> usize {
        let available = self.width - 2 * MARGIN - indent * INDENT;
        let per_char = kind.font_size() * kind.glyph_width();
        (available * 100 / per_char).max(1) as usize
    }

    fn place(&mut self, line: NarrativeLine) {
        let max = self.max_chars(line.kind, line.indent);
        for chunk in wrap(&line.text, max) {
            self.cursor -= line.kind.leading();
            if self.cursor < MARGIN {
                self.new_page();
                self.cursor -= line.kind.leading();
            }
            let x = if line.kind.is_centered() {
                let text_width =
                    chunk.chars().count() as i64 * line.kind.font_size() * line.kind.glyph_width() / 100;
                ((self.width - text_width) / 2).max(MARGIN)
            } else {
                MARGIN + line.indent * INDENT
            };
            self.current.lines.push(PlacedLine {
                kind: line.kind,
                x,
                y: self.cursor,
                text: chunk,
            });
        }
    }

    fn finish(mut self) -> DocumentLayout {
        if !self.current.lines.is_empty() || self.pages.is_empty() {
            let last = std::mem::take(&mut self.current);
            self.pages.push(last);
        }
        DocumentLayout {
            width: self.width,
            height: self.height,
            pages: self.pages,
        }
    }
}

/// Greedy word wrap per paragraph; words longer than a line are split.
///
/// Line breaks in `text` start a new line, and blank lines are kept.
fn wrap(text: &str, max: usize) -> Vec<String> {
    text.trim_matches(|c: char| c == '\n' || c == '\r')
        .split('\n')
        .flat_map(|paragraph| wrap_paragraph(paragraph.trim_end_matches('\r'), max))
        .collect()
}

fn wrap_paragraph(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > max && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// ─────────────────────────────────────────────────────────────────────────
// PDF encoding
// ─────────────────────────────────────────────────────────────────────────

/// PDF backend for the document layout.
///
/// Text is set in the standard Type1 Helvetica faces with WinAnsi encoding,
/// so only Latin-1 and the Windows-1252 extras can be drawn. Any other
/// character (Cyrillic, Greek, CJK, emoji) prints as `?`; the JSON and XLSX
/// exports keep such text intact.
#[derive(Debug, Clone, Default)]
pub struct DocumentEmitter {
    style: DocumentStyle,
    display: DisplaySettings,
}

impl DocumentEmitter {
    pub fn new(style: DocumentStyle, display: DisplaySettings) -> Self {
        Self { style, display }
    }

    pub fn from_settings(settings: &ExportSettings) -> Self {
        Self::new(settings.document.clone(), settings.display.clone())
    }

    /// Encodes a layout as PDF bytes.
    pub fn write(layout: &DocumentLayout, title: &str) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular,
                "F2" => bold,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
        for page in &layout.pages {
            let mut operations = Vec::with_capacity(page.lines.len() * 5);
            for line in &page.lines {
                let font = if line.kind.is_bold() { "F2" } else { "F1" };
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![font.into(), Object::Integer(line.kind.font_size())],
                ));
                operations.push(Operation::new(
                    "Td",
                    vec![Object::Integer(line.x), Object::Integer(line.y)],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(win_ansi(&line.text), StringFormat::Literal)],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(layout.width),
                Object::Integer(layout.height),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::String(win_ansi(title), StringFormat::Literal),
            "Producer" => Object::string_literal("feel-and-grow-rich"),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

/// Encodes text for the WinAnsi font encoding; unmappable characters
/// become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20}'..='\u{7e}' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '\t' => b' ',
        // Windows-1252 extras in 0x80..=0x9f.
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        // Look-alikes with no slot of their own.
        '\u{2010}' | '\u{2011}' | '\u{2212}' => b'-',
        '\u{2032}' => b'\'',
        '\u{2033}' => b'"',
        '\u{2002}'..='\u{200a}' | '\u{202f}' => b' ',
        _ => b'?',
    }
}

impl SessionEmitter for DocumentEmitter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, input: ExportInput<'_>) -> Result<Vec<u8>, RenderError> {
        let layout = DocumentLayout::build(input, &self.style, &self.display);
        Self::write(&layout, &self.style.title)
    }
}
