//! Export configuration

use chrono::format::{Item, StrftimeItems};
use chrono::FixedOffset;
use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::export::{DocumentStyle, ExportSettings, PageSize, DEFAULT_FILENAME_PREFIX};
use crate::domain::export::{DisplaySettings, DEFAULT_DATETIME_FORMAT};

/// Largest accepted distance from UTC, in minutes.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Prefix of suggested download filenames
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Title line of the narrative document
    #[serde(default = "default_document_title")]
    pub document_title: String,

    /// Subtitle line of the narrative document
    #[serde(default = "default_document_subtitle")]
    pub document_subtitle: String,

    /// Closing line of the narrative document
    #[serde(default = "default_footer_text")]
    pub footer_text: String,

    /// Offset applied when rendering human-readable timestamps
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// chrono strftime pattern for human-readable timestamps
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// Page size of the narrative document
    #[serde(default)]
    pub page_size: PageSize,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filename_prefix.trim().is_empty() {
            return Err(ValidationError::MissingRequired("export.filename_prefix"));
        }
        if !self
            .filename_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidFilenamePrefix);
        }
        if self.document_title.trim().is_empty() {
            return Err(ValidationError::MissingRequired("export.document_title"));
        }
        self.offset()?;
        validate_datetime_format(&self.datetime_format)?;
        Ok(())
    }

    /// The configured display offset.
    pub fn offset(&self) -> Result<FixedOffset, ValidationError> {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ValidationError::InvalidUtcOffset(self.utc_offset_minutes));
        }
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .ok_or(ValidationError::InvalidUtcOffset(self.utc_offset_minutes))
    }

    /// Build the settings consumed by the exporter.
    pub fn to_settings(&self) -> Result<ExportSettings, ValidationError> {
        self.validate()?;
        Ok(ExportSettings {
            filename_prefix: self.filename_prefix.clone(),
            display: DisplaySettings::new(self.offset()?, self.datetime_format.clone()),
            document: DocumentStyle {
                title: self.document_title.clone(),
                subtitle: self.document_subtitle.clone(),
                footer: self.footer_text.clone(),
                page_size: self.page_size,
            },
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_prefix: default_filename_prefix(),
            document_title: default_document_title(),
            document_subtitle: default_document_subtitle(),
            footer_text: default_footer_text(),
            utc_offset_minutes: 0,
            datetime_format: default_datetime_format(),
            page_size: PageSize::default(),
        }
    }
}

fn validate_datetime_format(pattern: &str) -> Result<(), ValidationError> {
    if pattern.trim().is_empty() {
        return Err(ValidationError::MissingRequired("export.datetime_format"));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ValidationError::InvalidDateTimeFormat(pattern.to_string()));
    }
    Ok(())
}

fn default_filename_prefix() -> String {
    DEFAULT_FILENAME_PREFIX.to_string()
}

fn default_document_title() -> String {
    DocumentStyle::default().title
}

fn default_document_subtitle() -> String {
    DocumentStyle::default().subtitle
}

fn default_footer_text() -> String {
    DocumentStyle::default().footer
}

fn default_datetime_format() -> String {
    DEFAULT_DATETIME_FORMAT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_defaults_match_exporter_defaults() {
        let settings = ExportConfig::default().to_settings().unwrap();
        assert_eq!(settings, ExportSettings::default());
    }

    #[test]
    fn test_filename_prefix_must_be_filename_safe() {
        let config = ExportConfig {
            filename_prefix: "../escape".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFilenamePrefix));
    }

    #[test]
    fn test_empty_filename_prefix_rejected() {
        let config = ExportConfig {
            filename_prefix: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("export.filename_prefix"))
        );
    }

    #[test]
    fn test_empty_title_rejected() {
        let config = ExportConfig {
            document_title: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_offset_range() {
        let east = ExportConfig {
            utc_offset_minutes: 840,
            ..Default::default()
        };
        assert!(east.validate().is_ok());

        let too_far = ExportConfig {
            utc_offset_minutes: -841,
            ..Default::default()
        };
        assert_eq!(too_far.validate(), Err(ValidationError::InvalidUtcOffset(-841)));
    }

    #[test]
    fn test_offset_flows_into_display_settings() {
        let config = ExportConfig {
            utc_offset_minutes: -300,
            ..Default::default()
        };
        let settings = config.to_settings().unwrap();
        assert_eq!(settings.display.offset.local_minus_utc(), -300 * 60);
    }

    #[test]
    fn test_broken_datetime_format_rejected() {
        let config = ExportConfig {
            datetime_format: "%Y-%Q".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDateTimeFormat(_))
        ));
    }

    #[test]
    fn test_page_size_deserializes_lowercase() {
        let config: ExportConfig = serde_json::from_str(r#"{"page_size":"a4"}"#).unwrap();
        assert_eq!(config.page_size, PageSize::A4);
        assert_eq!(config.filename_prefix, DEFAULT_FILENAME_PREFIX);
    }
}
