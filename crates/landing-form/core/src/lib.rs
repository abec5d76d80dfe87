//! Landing Form Core
//!
//! Validation for the landing page contact form. Every field is checked on
//! each pass and all failures are reported together, in field order.
//! Browser access goes through the [`FieldReader`] and [`FormPage`] traits so
//! the whole submit flow runs without a DOM.

pub mod config;
pub mod field;
pub mod page;
pub mod patterns;
pub mod result;
pub mod state;
pub mod validator;

pub use config::{ConfigError, FormConfig};
pub use field::{FieldId, FieldKind, FieldSpec};
pub use page::{FieldReader, FormPage};
pub use patterns::{is_hiragana_reading, is_valid_email, is_valid_phone};
pub use result::{FailureReason, ValidationFailure, ValidationResult};
pub use state::FormState;
pub use validator::{validate, FormValidator, SubmitOutcome};
