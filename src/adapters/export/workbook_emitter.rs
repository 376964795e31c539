//! Tabular workbook emitter.
//!
//! Building happens in two steps. [`WorkbookPlan::build`] lays out sheets,
//! headers and cells from the projection with no I/O. [`WorkbookEmitter`]
//! then writes the plan to an in-memory XLSX buffer.
//!
//! Sheet rules:
//! - a leading `Summary` sheet for batches (one row per session)
//! - one sheet per sub-assessment kind present in at least one session, in
//!   fixed kind order; sessions lacking that kind get an `N/A` row
//! - a trailing `AI Insights` sheet when any session carries interactions

use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, XlsxError};

use crate::domain::assessment::AssessmentKind;
use crate::domain::export::{
    descriptor, kinds_present, project_all, scalar_text, yes_no, DisplaySettings, Field,
    RowLayout, SessionProjection, TextStyle, Value, NOT_AVAILABLE,
};
use crate::domain::foundation::Timestamp;
use crate::domain::session::Session;
use crate::ports::{ExportFormat, ExportInput, RenderError, SessionEmitter};

pub const SUMMARY_SHEET: &str = "Summary";
pub const AI_INSIGHTS_SHEET: &str = "AI Insights";
const SESSION_ID_COLUMN: &str = "Session ID";
const MAX_COLUMN_WIDTH: usize = 60;

/// Excel's per-cell character limit.
pub const MAX_CELL_CHARS: usize = 32_767;

/// A single worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    /// Text cell, cut to [`MAX_CELL_CHARS`] characters.
    fn text(s: impl Into<String>) -> Self {
        let mut text = s.into();
        if let Some((end, _)) = text.char_indices().nth(MAX_CELL_CHARS) {
            text.truncate(end);
        }
        Cell::Text(text)
    }

    fn not_available() -> Self {
        Cell::text(NOT_AVAILABLE)
    }

    fn from_value(value: &Value, display: &DisplaySettings) -> Self {
        match value {
            Value::Integer(n) => Cell::Number(*n as f64),
            Value::Number(n) => Cell::Number(*n),
            Value::Duration(seconds) => Cell::Number(*seconds as f64),
            other => Cell::text(scalar_text(other, TextStyle::Declared, display)),
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Number(_) => None,
        }
    }

    fn display_width(&self) -> usize {
        match self {
            Cell::Text(s) => s.chars().count(),
            Cell::Number(n) => n.to_string().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetPlan {
    fn new(name: &str, headers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Index of a header, if present.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Text of the cell at `row` under `header`.
    pub fn text_at(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.column(header)?;
        self.rows.get(row)?.get(col)?.as_text()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(Cell::display_width)
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect()
    }
}

/// Sheets in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookPlan {
    pub sheets: Vec<SheetPlan>,
}

impl WorkbookPlan {
    pub fn build(input: ExportInput<'_>, display: &DisplaySettings) -> Self {
        let sessions = input.sessions();
        let projections = project_all(sessions);
        let mut sheets = Vec::new();

        if input.is_collection() {
            sheets.push(summary_sheet(&projections, display));
        }

        for kind in kinds_present(&projections) {
            sheets.push(kind_sheet(kind, &projections, display));
        }

        if sessions.iter().any(|s| !s.ai_interactions().is_empty()) {
            sheets.push(ai_insights_sheet(sessions, display));
        }

        // A workbook needs at least one sheet.
        if sheets.is_empty() {
            sheets.push(summary_sheet(&projections, display));
        }

        Self { sheets }
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetPlan> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

fn summary_sheet(projections: &[SessionProjection], display: &DisplaySettings) -> SheetPlan {
    let headers = [SESSION_ID_COLUMN, "Owner", "Created At", "Updated At"]
        .into_iter()
        .chain(AssessmentKind::ALL.iter().map(|k| k.label()));
    let mut sheet = SheetPlan::new(SUMMARY_SHEET, headers);

    for p in projections {
        let mut row = vec![
            Cell::text(p.id.to_string()),
            Cell::text(p.owner.as_str()),
            Cell::text(display.timestamp(&p.created_at)),
            Cell::text(display.timestamp(&p.updated_at)),
        ];
        row.extend(
            AssessmentKind::ALL
                .iter()
                .map(|kind| Cell::text(yes_no(p.has(*kind)))),
        );
        sheet.rows.push(row);
    }
    sheet
}

fn tabular_cells(fields: &[Field], display: &DisplaySettings) -> Vec<Cell> {
    fields
        .iter()
        .filter(|f| f.is_tabular())
        .map(|f| Cell::from_value(&f.value, display))
        .collect()
}

fn kind_sheet(
    kind: AssessmentKind,
    projections: &[SessionProjection],
    display: &DisplaySettings,
) -> SheetPlan {
    let d = descriptor(kind);
    let headers = std::iter::once(SESSION_ID_COLUMN).chain(d.columns.iter().copied());
    let mut sheet = SheetPlan::new(d.sheet_name, headers);

    for p in projections {
        let id = Cell::text(p.id.to_string());
        let placeholder = || {
            std::iter::once(id.clone())
                .chain(d.columns.iter().map(|_| Cell::not_available()))
                .collect::<Vec<_>>()
        };

        let Some(section) = p.section(kind) else {
            sheet.rows.push(placeholder());
            continue;
        };

        match d.layout {
            RowLayout::PerSession => {
                let mut row = vec![id.clone()];
                row.extend(tabular_cells(&section.fields, display));
                sheet.rows.push(row);
            }
            RowLayout::PerItem if section.records.is_empty() => sheet.rows.push(placeholder()),
            RowLayout::PerItem => {
                for record in &section.records {
                    let mut row = vec![id.clone()];
                    row.extend(tabular_cells(&record.fields, display));
                    sheet.rows.push(row);
                }
            }
        }
    }
    sheet
}

fn ai_insights_sheet(sessions: &[Session], display: &DisplaySettings) -> SheetPlan {
    let mut sheet = SheetPlan::new(
        AI_INSIGHTS_SHEET,
        [SESSION_ID_COLUMN, "Prompt", "Response", "Timestamp"],
    );
    for session in sessions {
        for interaction in session.ai_interactions() {
            sheet.rows.push(vec![
                Cell::text(session.id().to_string()),
                Cell::text(interaction.prompt.as_str()),
                Cell::text(interaction.response.as_str()),
                Cell::text(display.timestamp(&interaction.timestamp)),
            ]);
        }
    }
    sheet
}

/// XLSX backend for the workbook plan.
#[derive(Debug, Clone, Default)]
pub struct WorkbookEmitter {
    display: DisplaySettings,
}

impl WorkbookEmitter {
    pub fn new(display: DisplaySettings) -> Self {
        Self { display }
    }

    /// Writes a plan to an XLSX buffer.
    ///
    /// The creation date in the document properties is `stamp`, so equal
    /// input yields equal bytes.
    pub fn write(plan: &WorkbookPlan, stamp: Timestamp) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        for sheet in &plan.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            for (col, header) in sheet.headers.iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
            }
            for (r, row) in sheet.rows.iter().enumerate() {
                let row_index = (r + 1) as u32;
                for (c, cell) in row.iter().enumerate() {
                    match cell {
                        Cell::Text(text) => worksheet.write_string(row_index, c as u16, text)?,
                        Cell::Number(n) => worksheet.write_number(row_index, c as u16, *n)?,
                    };
                }
            }
            for (col, width) in sheet.column_widths().into_iter().enumerate() {
                worksheet.set_column_width(col as u16, (width + 2) as f64)?;
            }
            worksheet.set_freeze_panes(1, 0)?;
        }

        let created = excel_datetime(stamp)?;
        let properties = DocProperties::new().set_creation_datetime(&created);
        workbook.set_properties(&properties);

        workbook.save_to_buffer()
    }
}

fn excel_datetime(ts: Timestamp) -> Result<ExcelDateTime, XlsxError> {
    use chrono::{Datelike, Timelike};

    let dt = ts.as_datetime();
    // Excel dates start in 1900.
    let year = dt.year().clamp(1900, 9999) as u16;
    ExcelDateTime::from_ymd(year, dt.month() as u8, dt.day() as u8)?.and_hms(
        dt.hour() as u16,
        dt.minute() as u8,
        dt.second(),
    )
}

impl SessionEmitter for WorkbookEmitter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn render(&self, input: ExportInput<'_>) -> Result<Vec<u8>, RenderError> {
        let plan = WorkbookPlan::build(input, &self.display);
        let stamp = input
            .last_updated()
            .unwrap_or_else(|| Timestamp::from_datetime(chrono::DateTime::default()));
        Ok(Self::write(&plan, stamp)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{
        BeliefItemType, BeliefMap, BeliefMapItem, DailyPractice, Emotions, FeelingsDial,
        HillOverlay, Intake,
    };
    use crate::domain::foundation::{SessionId, UserId};
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::new(SessionId::new(), UserId::new("user-1").unwrap())
    }

    fn with_hill(mut s: Session) -> Session {
        s.record(HillOverlay::new("Faith", "read one chapter").into())
            .unwrap();
        s
    }

    #[test]
    fn single_feelings_dial_session_has_one_sheet() {
        let mut s = session();
        let mut dial = FeelingsDial::new(Emotions::from_ratings([3, 7, 2, 1, 5, 8]).unwrap());
        dial.reflections = Some("calmer now".into());
        s.record(dial.into()).unwrap();

        let plan = WorkbookPlan::build(ExportInput::Single(&s), &DisplaySettings::default());
        assert_eq!(plan.sheet_names(), vec!["Feelings Dial"]);

        let sheet = plan.sheet("Feelings Dial").unwrap();
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.text_at(0, "Reflections"), Some("calmer now"));
        assert_eq!(sheet.rows[0][sheet.column("Anger").unwrap()], Cell::Number(3.0));
        assert_eq!(sheet.text_at(0, "Sit Completed At"), Some("N/A"));
    }

    #[test]
    fn batch_without_hill_overlay_has_no_hill_sheet() {
        let mut a = session();
        a.record(Intake::new("Ada", true).into()).unwrap();
        let sessions = vec![a, session()];

        let plan = WorkbookPlan::build(
            ExportInput::Collection(&sessions),
            &DisplaySettings::default(),
        );
        assert_eq!(plan.sheet_names(), vec!["Summary", "Intake"]);
    }

    #[test]
    fn single_hill_overlay_gives_exactly_one_data_row() {
        let sessions = vec![with_hill(session())];
        let plan = WorkbookPlan::build(
            ExportInput::Collection(&sessions),
            &DisplaySettings::default(),
        );
        let hill = plan.sheet("Hill Overlay").unwrap();
        assert_eq!(hill.rows.len(), 1);
        assert_eq!(hill.text_at(0, "Micro-Action"), Some("read one chapter"));
        assert_eq!(hill.text_at(0, "Commitment"), Some("N/A"));
    }

    #[test]
    fn sessions_lacking_a_kind_get_placeholder_rows() {
        let sessions = vec![session(), with_hill(session())];
        let plan = WorkbookPlan::build(
            ExportInput::Collection(&sessions),
            &DisplaySettings::default(),
        );
        let hill = plan.sheet("Hill Overlay").unwrap();
        assert_eq!(hill.rows.len(), 2);
        let first_id = sessions[0].id().to_string();
        assert_eq!(hill.text_at(0, "Session ID"), Some(first_id.as_str()));
        assert_eq!(hill.text_at(0, "Principle"), Some("N/A"));
        assert_eq!(hill.text_at(1, "Principle"), Some("Faith"));
    }

    #[test]
    fn summary_flags_presence_per_kind() {
        let sessions = vec![session(), with_hill(session())];
        let plan = WorkbookPlan::build(
            ExportInput::Collection(&sessions),
            &DisplaySettings::default(),
        );
        let summary = plan.sheet("Summary").unwrap();
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.text_at(0, "Hill Overlay"), Some("No"));
        assert_eq!(summary.text_at(1, "Hill Overlay"), Some("Yes"));
        assert_eq!(summary.text_at(1, "Intake"), Some("No"));
        assert_eq!(summary.text_at(0, "Owner"), Some("user-1"));
    }

    #[test]
    fn belief_map_rows_follow_item_order() {
        let mut s = session();
        s.record(
            BeliefMap::new(vec![
                BeliefItemType::Event,
                BeliefItemType::Belief,
                BeliefItemType::Loop,
            ]
            .into_iter()
            .enumerate()
            .map(|(i, t)| BeliefMapItem::new(format!("n{}", i), t, format!("item {}", i)))
            .collect())
            .into(),
        )
        .unwrap();
        let mut empty_map = session();
        empty_map.record(BeliefMap::default().into()).unwrap();
        let sessions = vec![s, empty_map];

        let plan = WorkbookPlan::build(
            ExportInput::Collection(&sessions),
            &DisplaySettings::default(),
        );
        let sheet = plan.sheet("Belief Map").unwrap();
        assert_eq!(sheet.rows.len(), 4);
        let types: Vec<_> = (0..3).map(|r| sheet.text_at(r, "Type").unwrap()).collect();
        assert_eq!(types, vec!["event", "belief", "loop"]);
        assert_eq!(sheet.text_at(0, "Connected To"), Some("None"));
        assert_eq!(sheet.text_at(3, "Content"), Some("N/A"));
    }

    #[test]
    fn daily_practice_duration_is_raw_seconds() {
        let mut s = session();
        s.record(
            DailyPractice {
                duration: Some(125),
                ..Default::default()
            }
            .into(),
        )
        .unwrap();
        let plan = WorkbookPlan::build(ExportInput::Single(&s), &DisplaySettings::default());
        let sheet = plan.sheet("Daily 10").unwrap();
        assert_eq!(sheet.rows[0][sheet.column("Duration").unwrap()], Cell::Number(125.0));
        assert_eq!(sheet.text_at(0, "What would love do?"), Some("N/A"));
    }

    #[test]
    fn ai_interactions_add_trailing_sheet() {
        let mut s = with_hill(session());
        s.record_ai_interaction("What next?", "Take one step.", Timestamp::now())
            .unwrap();
        let plan = WorkbookPlan::build(ExportInput::Single(&s), &DisplaySettings::default());
        assert_eq!(plan.sheet_names(), vec!["Hill Overlay", "AI Insights"]);
        let ai = plan.sheet("AI Insights").unwrap();
        assert_eq!(ai.text_at(0, "Response"), Some("Take one step."));
    }

    #[test]
    fn empty_single_session_still_has_a_sheet() {
        let s = session();
        let plan = WorkbookPlan::build(ExportInput::Single(&s), &DisplaySettings::default());
        assert_eq!(plan.sheet_names(), vec!["Summary"]);
    }

    #[test]
    fn rendering_is_deterministic_zip() {
        let s = with_hill(session());
        let emitter = WorkbookEmitter::default();
        let first = emitter.render(ExportInput::Single(&s)).unwrap();
        let second = emitter.render(ExportInput::Single(&s)).unwrap();
        assert_eq!(&first[..2], b"PK");
        assert_eq!(first, second);
    }

    #[test]
    fn overlong_text_is_cut_to_the_cell_limit() {
        let mut s = session();
        let mut dial = FeelingsDial::new(Emotions::from_ratings([1, 1, 1, 1, 1, 1]).unwrap());
        dial.reflections = Some("x".repeat(40_000));
        s.record(dial.into()).unwrap();
        s.record_ai_interaction("Why?", "é".repeat(MAX_CELL_CHARS + 5), Timestamp::now())
            .unwrap();

        let plan = WorkbookPlan::build(ExportInput::Single(&s), &DisplaySettings::default());
        let reflections = plan.sheet("Feelings Dial").unwrap().text_at(0, "Reflections").unwrap();
        assert_eq!(reflections.chars().count(), MAX_CELL_CHARS);
        let response = plan.sheet(AI_INSIGHTS_SHEET).unwrap().text_at(0, "Response").unwrap();
        assert_eq!(response.chars().count(), MAX_CELL_CHARS);

        assert!(WorkbookEmitter::default().render(ExportInput::Single(&s)).is_ok());
    }

    #[test]
    fn short_text_is_kept_whole() {
        assert_eq!(Cell::text("calmer now"), Cell::Text("calmer now".to_string()));
    }
}
