//! Export façade: one entry point per format over the three emitters.

use crate::domain::foundation::Timestamp;
use crate::ports::{ExportError, ExportFormat, ExportInput, ExportedDocument, SessionEmitter};

use super::document_emitter::DocumentEmitter;
use super::json_emitter::JsonEmitter;
use super::settings::ExportSettings;
use super::workbook_emitter::WorkbookEmitter;

/// Renders sessions in any supported format and names the result.
///
/// # Example
///
/// ```rust,ignore
/// let exporter = SessionExporter::new(config.export.to_settings()?);
/// let doc = exporter.export(ExportFormat::Pdf, ExportInput::Single(&session), Timestamp::now())?;
/// ```
#[derive(Debug, Clone)]
pub struct SessionExporter {
    settings: ExportSettings,
    json: JsonEmitter,
    workbook: WorkbookEmitter,
    document: DocumentEmitter,
}

impl SessionExporter {
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            json: JsonEmitter::new(),
            workbook: WorkbookEmitter::new(settings.display.clone()),
            document: DocumentEmitter::from_settings(&settings),
            settings,
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// The emitter for a format.
    pub fn emitter(&self, format: ExportFormat) -> &dyn SessionEmitter {
        match format {
            ExportFormat::Json => &self.json,
            ExportFormat::Xlsx => &self.workbook,
            ExportFormat::Pdf => &self.document,
        }
    }

    pub fn to_json(
        &self,
        input: ExportInput<'_>,
        generated_at: Timestamp,
    ) -> Result<ExportedDocument, ExportError> {
        self.export(ExportFormat::Json, input, generated_at)
    }

    pub fn to_workbook(
        &self,
        input: ExportInput<'_>,
        generated_at: Timestamp,
    ) -> Result<ExportedDocument, ExportError> {
        self.export(ExportFormat::Xlsx, input, generated_at)
    }

    pub fn to_document(
        &self,
        input: ExportInput<'_>,
        generated_at: Timestamp,
    ) -> Result<ExportedDocument, ExportError> {
        self.export(ExportFormat::Pdf, input, generated_at)
    }

    /// Renders `input` and wraps the bytes with MIME type and filename.
    ///
    /// `generated_at` only affects the filename.
    pub fn export(
        &self,
        format: ExportFormat,
        input: ExportInput<'_>,
        generated_at: Timestamp,
    ) -> Result<ExportedDocument, ExportError> {
        let content = self.emitter(format).render(input).map_err(|e| {
            tracing::error!(format = %format, sessions = input.len(), error = %e, "Export render failed");
            ExportError::Render(e)
        })?;

        tracing::info!(
            format = %format,
            sessions = input.len(),
            bytes = content.len(),
            "Export rendered"
        );

        Ok(ExportedDocument::new(
            content,
            format,
            &self.settings.filename_prefix,
            generated_at,
        ))
    }
}

impl Default for SessionExporter {
    fn default() -> Self {
        Self::new(ExportSettings::default())
    }
}
