//! Rendering settings shared by the export emitters.

use serde::{Deserialize, Serialize};

use crate::domain::export::DisplaySettings;

/// Default download filename prefix.
pub const DEFAULT_FILENAME_PREFIX: &str = "feel-and-grow-rich";

/// Physical page size of the narrative document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    /// Width and height in PDF points.
    pub fn dimensions(&self) -> (i64, i64) {
        match self {
            PageSize::Letter => (612, 792),
            PageSize::A4 => (595, 842),
        }
    }
}

/// Fixed text of the narrative document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStyle {
    pub title: String,
    pub subtitle: String,
    pub footer: String,
    pub page_size: PageSize,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            title: "Feel and Grow Rich".to_string(),
            subtitle: "Your Wealth Consciousness Journey".to_string(),
            footer: "Generated by Feel and Grow Rich".to_string(),
            page_size: PageSize::Letter,
        }
    }
}

/// Everything the exporter needs besides the sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub filename_prefix: String,
    pub display: DisplaySettings,
    pub document: DocumentStyle,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            display: DisplaySettings::default(),
            document: DocumentStyle::default(),
        }
    }
}
