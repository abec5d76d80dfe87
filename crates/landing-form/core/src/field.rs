// File: src/field.rs
// Purpose: Field identifiers and the static per-field validation rules

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::patterns::{EMAIL_REGEX, FURIGANA_REGEX, PHONE_REGEX};

/// The six controls of the contact form, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Furigana,
    Email,
    Phone,
    Occupation,
    Privacy,
}

impl FieldId {
    /// Every field, in the order failures are reported
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Furigana,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Occupation,
        FieldId::Privacy,
    ];

    /// Element id on the page and key in serialized state
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Furigana => "furigana",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Occupation => "occupation",
            FieldId::Privacy => "privacy",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Privacy => FieldKind::Consent,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown form field '{}'", s))
    }
}

/// How a field's value is read and checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String value, trimmed before checks
    Text,
    /// Checkbox that must be ticked
    Consent,
}

/// Validation rule for one field
///
/// Built once (from defaults or [`FormConfig`](crate::FormConfig)) and only
/// read afterwards.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub pattern: Option<Regex>,
    pub empty_message: String,
    pub pattern_message: String,
}

impl FieldSpec {
    fn text(id: FieldId, label: &str, empty_message: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            kind: id.kind(),
            required: true,
            pattern: None,
            empty_message: empty_message.to_string(),
            pattern_message: String::new(),
        }
    }

    fn with_pattern(mut self, pattern: &Regex, message: &str) -> Self {
        self.pattern = Some(pattern.clone());
        self.pattern_message = message.to_string();
        self
    }

    /// The built-in rules with Japanese messages
    pub fn defaults() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text(FieldId::Name, "お名前", "お名前を入力してください"),
            FieldSpec::text(FieldId::Furigana, "ふりがな", "ふりがなを入力してください")
                .with_pattern(&FURIGANA_REGEX, "ふりがなはひらがなで入力してください"),
            FieldSpec::text(FieldId::Email, "メールアドレス", "メールアドレスを入力してください")
                .with_pattern(&EMAIL_REGEX, "正しいメールアドレスを入力してください"),
            FieldSpec::text(FieldId::Phone, "電話番号", "電話番号を入力してください")
                .with_pattern(&PHONE_REGEX, "正しい電話番号を入力してください"),
            FieldSpec::text(FieldId::Occupation, "ご職業", "ご職業を選択してください"),
            FieldSpec::text(
                FieldId::Privacy,
                "個人情報の取り扱い",
                "個人情報の取り扱いに同意してください",
            ),
        ]
    }
}
