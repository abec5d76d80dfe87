// File: src/state.rs
// Purpose: Snapshot of the form values taken at submission time

use serde::{Deserialize, Serialize};

use crate::field::{FieldId, FieldKind};
use crate::page::FieldReader;

/// Field values for one validation pass
///
/// Never cached: the submit flow builds a new snapshot on every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub name: String,
    pub furigana: String,
    pub email: String,
    pub phone: String,
    pub occupation: String,
    pub privacy: bool,
}

impl FormState {
    /// Take a snapshot through an injected reader
    pub fn read_from<R: FieldReader + ?Sized>(reader: &R) -> Self {
        Self {
            name: reader.text(FieldId::Name),
            furigana: reader.text(FieldId::Furigana),
            email: reader.text(FieldId::Email),
            phone: reader.text(FieldId::Phone),
            occupation: reader.text(FieldId::Occupation),
            privacy: reader.checked(FieldId::Privacy),
        }
    }

    /// Raw text of a text field; `None` for the consent checkbox
    pub fn text(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => Some(&self.name),
            FieldId::Furigana => Some(&self.furigana),
            FieldId::Email => Some(&self.email),
            FieldId::Phone => Some(&self.phone),
            FieldId::Occupation => Some(&self.occupation),
            FieldId::Privacy => None,
        }
    }

    /// Whether a field counts as filled in (trimmed text non-empty, or consent given)
    pub fn is_filled(&self, field: FieldId) -> bool {
        match field.kind() {
            FieldKind::Consent => self.privacy,
            FieldKind::Text => self
                .text(field)
                .map(|v| !v.trim().is_empty())
                .unwrap_or(false),
        }
    }
}
