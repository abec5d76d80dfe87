// File: src/page.rs
// Purpose: Seams between the validator and whatever hosts the form

use crate::field::FieldId;
use crate::result::ValidationFailure;

/// Read access to the current field values
///
/// Values are read fresh on every call. Implementations return the raw,
/// untrimmed value; trimming is the validator's job.
pub trait FieldReader {
    /// Current value of a text-like control (input, select, textarea)
    fn text(&self, field: FieldId) -> String;

    /// Whether a checkbox control is ticked
    fn checked(&self, field: FieldId) -> bool;
}

/// Everything the submit flow does to the page besides reading it
///
/// The browser adapter implements this over the DOM; tests implement it
/// with an in-memory recorder.
pub trait FormPage: FieldReader {
    /// Remove every error marker and border emphasis
    fn clear_feedback(&mut self);

    /// Remove the marker and emphasis of one field
    fn clear_field_feedback(&mut self, field: FieldId);

    /// Insert a marker next to the failing field and emphasize it
    fn show_failure(&mut self, failure: &ValidationFailure, border_color: &str);

    /// Bring a field into view and focus it
    fn reveal(&mut self, field: FieldId);

    /// Blocking yes/no prompt
    fn confirm(&mut self, message: &str) -> bool;

    /// Blocking notice
    fn acknowledge(&mut self, message: &str);

    /// Clear all controls back to their initial values
    fn reset(&mut self);
}
