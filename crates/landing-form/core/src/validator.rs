// File: src/validator.rs
// Purpose: Validation pass and the submit flow built on top of it

use crate::config::{ConfigError, FormConfig};
use crate::field::{FieldId, FieldKind, FieldSpec};
use crate::page::FormPage;
use crate::result::{FailureReason, ValidationFailure, ValidationResult};
use crate::state::FormState;

/// Check every field of `state` against `specs`
///
/// All fields are evaluated; failures come back in `specs` order. A field
/// that fails its empty check is not pattern-checked.
pub fn validate(state: &FormState, specs: &[FieldSpec]) -> ValidationResult {
    let failures = specs
        .iter()
        .filter_map(|spec| check_field(state, spec))
        .collect();
    ValidationResult::new(failures)
}

fn check_field(state: &FormState, spec: &FieldSpec) -> Option<ValidationFailure> {
    let failure = |reason, message: &str| ValidationFailure {
        field: spec.id,
        reason,
        message: message.to_string(),
    };

    if !state.is_filled(spec.id) {
        return spec
            .required
            .then(|| failure(FailureReason::Empty, &spec.empty_message));
    }

    if spec.kind == FieldKind::Consent {
        return None;
    }

    let value = state.text(spec.id)?.trim();
    match &spec.pattern {
        Some(pattern) if !pattern.is_match(value) => {
            Some(failure(FailureReason::PatternMismatch, &spec.pattern_message))
        }
        _ => None,
    }
}

/// What happened to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; markers are shown
    Rejected(ValidationResult),
    /// Valid, but the user cancelled the confirmation
    Declined,
    /// Valid and confirmed; the form was reset
    Submitted,
}

/// Contact form validator with its configured rules and texts
#[derive(Debug, Clone)]
pub struct FormValidator {
    specs: Vec<FieldSpec>,
    confirm_message: String,
    success_message: String,
    error_border_color: String,
}

impl Default for FormValidator {
    fn default() -> Self {
        let config = FormConfig::default();
        Self {
            specs: FieldSpec::defaults(),
            confirm_message: config.messages.confirm,
            success_message: config.messages.success,
            error_border_color: config.form.error_border_color,
        }
    }
}

impl FormValidator {
    pub fn new(config: &FormConfig) -> Result<Self, ConfigError> {
        config.check()?;
        Ok(Self {
            specs: config.field_specs()?,
            confirm_message: config.messages.confirm.clone(),
            success_message: config.messages.success.clone(),
            error_border_color: config.form.error_border_color.clone(),
        })
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn spec(&self, field: FieldId) -> Option<&FieldSpec> {
        self.specs.iter().find(|s| s.id == field)
    }

    pub fn validate(&self, state: &FormState) -> ValidationResult {
        validate(state, &self.specs)
    }

    /// Run one submission against the page
    ///
    /// Clears old markers, validates a fresh snapshot, and either shows the
    /// failures or goes through confirm, acknowledge and reset.
    pub fn handle_submit<P: FormPage + ?Sized>(&self, page: &mut P) -> SubmitOutcome {
        page.clear_feedback();

        let state = FormState::read_from(&*page);
        let result = self.validate(&state);
        tracing::debug!(failures = result.len(), "contact form validated");

        if let Some(first) = result.first() {
            for failure in &result {
                page.show_failure(failure, &self.error_border_color);
            }
            page.reveal(first.field);
            return SubmitOutcome::Rejected(result);
        }

        if !page.confirm(&self.confirm_message) {
            tracing::info!("contact form submission declined at confirmation");
            return SubmitOutcome::Declined;
        }

        page.acknowledge(&self.success_message);
        page.reset();
        tracing::info!("contact form submitted");
        SubmitOutcome::Submitted
    }

    /// The user edited a field: drop its marker
    pub fn handle_input<P: FormPage + ?Sized>(&self, page: &mut P, field: FieldId) {
        page.clear_field_feedback(field);
    }
}
