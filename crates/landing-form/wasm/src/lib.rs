//! Landing Form WASM
//!
//! WebAssembly bindings for the contact form.
//! Exposes the same validation as `landing-form-core` to JavaScript and can
//! bind it directly to the page's form.

use landing_form_core::{self as core, FormConfig, FormState, FormValidator};
use wasm_bindgen::prelude::*;

mod dom;
mod error;
mod events;

pub use error::BindError;

/// Set panic hook and log subscriber for the browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let _ = tracing_wasm::try_set_as_global_default();
}

/// `undefined`/`null` mean the defaults
fn config_from_js(config: JsValue) -> Result<FormConfig, BindError> {
    if config.is_undefined() || config.is_null() {
        return Ok(FormConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(config)?)
}

/// Validate a form snapshot
///
/// # Arguments
/// * `state` - Object with `name`, `furigana`, `email`, `phone`, `occupation`, `privacy`
/// * `config` - Optional form config (same shape as the TOML file)
///
/// # Returns
/// Array of `{ field, reason, message }` (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const failures = validateForm({
///     name: '田中 太郎',
///     furigana: 'たなか たろう',
///     email: 'tanaka@example.com',
///     phone: '090-1234-5678',
///     occupation: '会社員',
///     privacy: true,
/// });
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(state: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let state: FormState = serde_wasm_bindgen::from_value(state)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form state: {}", e)))?;
    let validator = FormValidator::new(&config_from_js(config)?).map_err(BindError::from)?;

    let result = validator.validate(&state);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Bind validation to the form on the current page
///
/// Intercepts `submit`, shows inline errors, and asks for confirmation
/// before resetting the form.
#[wasm_bindgen(js_name = attachFormValidator)]
pub fn attach_form_validator(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(config)?;
    events::attach(&config)?;
    Ok(())
}

/// Quick furigana check (hiragana and spaces)
#[wasm_bindgen(js_name = isHiraganaReading)]
pub fn is_hiragana_reading_js(value: &str) -> bool {
    core::is_hiragana_reading(value)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Quick phone validation
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(phone: &str) -> bool {
    core::is_valid_phone(phone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_pattern_helpers() {
        assert!(is_hiragana_reading_js("たなか"));
        assert!(!is_hiragana_reading_js("Tanaka"));
        assert!(is_valid_email_js("a@b.com"));
        assert!(!is_valid_email_js("not-an-email"));
        assert!(is_valid_phone_js("090-1234-5678"));
        assert!(!is_valid_phone_js("090 1234 5678"));
    }

    #[wasm_bindgen_test]
    fn test_validate_form_reports_all_failures() {
        let state = serde_wasm_bindgen::to_value(&FormState::default()).unwrap();
        let result = validate_form(state, JsValue::UNDEFINED).unwrap();
        let failures: Vec<core::ValidationFailure> =
            serde_wasm_bindgen::from_value(result).unwrap();
        assert_eq!(failures.len(), 6);
        assert_eq!(failures[0].field, core::FieldId::Name);
        assert_eq!(failures[5].reason, core::FailureReason::Empty);
    }

    #[wasm_bindgen_test]
    fn test_validate_form_accepts_valid_state() {
        let state = FormState {
            name: "田中 太郎".to_string(),
            furigana: "たなか たろう".to_string(),
            email: "a@b.com".to_string(),
            phone: "090-1234-5678".to_string(),
            occupation: "会社員".to_string(),
            privacy: true,
        };
        let result = validate_form(serde_wasm_bindgen::to_value(&state).unwrap(), JsValue::NULL)
            .unwrap();
        let failures: Vec<core::ValidationFailure> =
            serde_wasm_bindgen::from_value(result).unwrap();
        assert!(failures.is_empty());
    }
}
