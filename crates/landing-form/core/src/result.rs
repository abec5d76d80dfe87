// File: src/result.rs
// Purpose: Per-field failures and the ordered result of one validation pass

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::FieldId;

/// Why a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    /// Blank after trimming, or consent not given
    Empty,
    /// Filled in but the value does not match the field's pattern
    PatternMismatch,
}

/// One failing field
///
/// A normal outcome of validation, shown to the user for correction.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationFailure {
    pub field: FieldId,
    pub reason: FailureReason,
    pub message: String,
}

/// Failures from one pass, in field declaration order
///
/// Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    pub fn new(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationFailure> {
        self.failures.iter()
    }

    /// First failing field, where focus goes
    pub fn first(&self) -> Option<&ValidationFailure> {
        self.failures.first()
    }

    /// Failure for a specific field
    pub fn get(&self, field: FieldId) -> Option<&ValidationFailure> {
        self.failures.iter().find(|f| f.field == field)
    }

    pub fn fields(&self) -> Vec<FieldId> {
        self.failures.iter().map(|f| f.field).collect()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(field: FieldId, reason: FailureReason) -> ValidationFailure {
        ValidationFailure {
            field,
            reason,
            message: format!("{} {:?}", field, reason),
        }
    }

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid());
        assert!(result.first().is_none());
    }

    #[test]
    fn test_lookup_by_field() {
        let result = ValidationResult::new(vec![
            failure(FieldId::Email, FailureReason::PatternMismatch),
            failure(FieldId::Privacy, FailureReason::Empty),
        ]);
        assert!(!result.is_valid());
        assert_eq!(result.len(), 2);
        assert_eq!(result.first().map(|f| f.field), Some(FieldId::Email));
        assert_eq!(
            result.get(FieldId::Privacy).map(|f| f.reason),
            Some(FailureReason::Empty)
        );
        assert!(result.get(FieldId::Name).is_none());
        assert_eq!(result.fields(), vec![FieldId::Email, FieldId::Privacy]);
    }

    #[test]
    fn test_display_is_the_message() {
        let f = ValidationFailure {
            field: FieldId::Name,
            reason: FailureReason::Empty,
            message: "お名前を入力してください".to_string(),
        };
        assert_eq!(f.to_string(), "お名前を入力してください");
    }
}
