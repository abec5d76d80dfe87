// File: src/config.rs
// Purpose: Form configuration (element ids, styling, message overrides) from TOML or JS

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::{FieldId, FieldKind, FieldSpec};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse form config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: FieldId,
        #[source]
        source: regex::Error,
    },

    #[error("field '{0}' is a consent checkbox and cannot have a pattern")]
    PatternOnConsent(FieldId),

    #[error("error_class '{0}' must be a single CSS class name")]
    InvalidErrorClass(String),
}

// One class token, usable both in `class=".."` and in a `.class` selector
static CLASS_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[_a-zA-Z][_a-zA-Z0-9-]*$").unwrap());

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSection,

    #[serde(default)]
    pub messages: MessagesConfig,

    /// Per-field overrides, keyed by field id
    #[serde(default)]
    pub fields: BTreeMap<FieldId, FieldOverride>,
}

/// Page wiring and error styling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSection {
    #[serde(default = "default_form_id")]
    pub form_id: String,

    /// Class given to inserted error elements
    #[serde(default = "default_error_class")]
    pub error_class: String,

    #[serde(default = "default_error_border_color")]
    pub error_border_color: String,
}

/// Texts of the acceptance path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_confirm")]
    pub confirm: String,

    #[serde(default = "default_success")]
    pub success: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldOverride {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub empty_message: Option<String>,

    #[serde(default)]
    pub pattern_message: Option<String>,

    /// Replaces the built-in pattern (text fields only)
    #[serde(default)]
    pub pattern: Option<String>,
}

// Default values
fn default_form_id() -> String {
    "contactForm".to_string()
}

fn default_error_class() -> String {
    "error-message".to_string()
}

fn default_error_border_color() -> String {
    "#e74c3c".to_string()
}

fn default_confirm() -> String {
    "この内容で送信してもよろしいですか？".to_string()
}

fn default_success() -> String {
    "お問い合わせありがとうございます。送信が完了しました。".to_string()
}

impl Default for FormSection {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
            error_class: default_error_class(),
            error_border_color: default_error_border_color(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            confirm: default_confirm(),
            success: default_success(),
        }
    }
}

impl FormConfig {
    /// Parse configuration from a TOML string; blank input gives the defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form config: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse form config: {:?}", path))
    }

    /// Reject page settings the DOM adapter cannot use
    pub fn check(&self) -> Result<(), ConfigError> {
        if !CLASS_NAME_REGEX.is_match(&self.form.error_class) {
            return Err(ConfigError::InvalidErrorClass(self.form.error_class.clone()));
        }
        Ok(())
    }

    /// Built-in field rules with this config's overrides applied
    ///
    /// A field that gains a pattern without a mismatch message gets one
    /// built from its label.
    pub fn field_specs(&self) -> Result<Vec<FieldSpec>, ConfigError> {
        let mut specs = FieldSpec::defaults();

        for spec in &mut specs {
            let Some(overrides) = self.fields.get(&spec.id) else {
                continue;
            };

            if let Some(label) = &overrides.label {
                spec.label = label.clone();
            }
            if let Some(msg) = &overrides.empty_message {
                spec.empty_message = msg.clone();
            }
            if let Some(msg) = &overrides.pattern_message {
                spec.pattern_message = msg.clone();
            }
            if let Some(pattern) = &overrides.pattern {
                if spec.kind == FieldKind::Consent {
                    return Err(ConfigError::PatternOnConsent(spec.id));
                }
                let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    field: spec.id,
                    source,
                })?;
                spec.pattern = Some(regex);
                if spec.pattern_message.is_empty() {
                    spec.pattern_message = format!("{}の形式が正しくありません", spec.label);
                }
            }
        }

        Ok(specs)
    }
}
