//! Form configuration.
//!
//! A form is described as JSON: a title, a theme mode and a list of fields.
//! The demo binary reads it from a path given on the command line, or from
//! `form.json` in the platform config directory, or falls back to a sample.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::style::FieldVariant;
use crate::ui::theme::ThemeMode;

/// Name of the config file looked up in the platform config directory.
pub const FORM_FILE_NAME: &str = "form.json";

/// Errors raised while loading a form description.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid form description: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field {index} has an empty label")]
    MissingLabel { index: usize },
}

/// Which control a field renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text field.
    #[default]
    Text,
    /// Multi-line text area.
    TextArea,
}

/// Description of one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub kind: FieldKind,
    pub label: String,
    /// Initial value.
    pub value: Option<String>,
    pub warning: Option<String>,
    pub disabled: bool,
    pub width: Option<String>,
    /// Ignored by text areas.
    pub variant: FieldVariant,
    pub placeholder: Option<String>,
    pub max_length: Option<usize>,
    pub read_only: bool,
    /// Visible rows of a text area.
    pub rows: Option<u32>,
}

impl FieldConfig {
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn text_area(label: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::TextArea,
            label: label.into(),
            ..Default::default()
        }
    }
}

/// A whole form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub title: String,
    pub theme: ThemeMode,
    pub fields: Vec<FieldConfig>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "Form".to_string(),
            theme: ThemeMode::default(),
            fields: Vec::new(),
        }
    }
}

impl FormConfig {
    /// Parse and validate a JSON description.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a description from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded form description");
        Self::from_json(&raw)
    }

    /// Load from the platform config directory, or use the sample form.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no form description found, using sample form");
                Ok(Self::sample())
            }
        }
    }

    /// `form.json` inside the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "float-fields", "float-fields")
            .map(|dirs| dirs.config_dir().join(FORM_FILE_NAME))
    }

    /// Labels are required.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.fields.iter().position(|f| f.label.trim().is_empty()) {
            Some(index) => Err(ConfigError::MissingLabel { index }),
            None => Ok(()),
        }
    }

    /// A form exercising every option.
    pub fn sample() -> Self {
        Self {
            title: "Contact".to_string(),
            theme: ThemeMode::Light,
            fields: vec![
                FieldConfig {
                    width: Some("50%".to_string()),
                    ..FieldConfig::text("Name")
                },
                FieldConfig {
                    warning: Some("required".to_string()),
                    variant: FieldVariant::Boxed,
                    placeholder: Some("you@example.com".to_string()),
                    ..FieldConfig::text("Email")
                },
                FieldConfig {
                    value: Some("ACME-42".to_string()),
                    disabled: true,
                    width: Some("banana".to_string()),
                    ..FieldConfig::text("Account")
                },
                FieldConfig {
                    rows: Some(5),
                    width: Some("80%".to_string()),
                    max_length: Some(500),
                    ..FieldConfig::text_area("Message")
                },
            ],
        }
    }
}
