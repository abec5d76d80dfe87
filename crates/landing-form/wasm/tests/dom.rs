/// Browser tests for the DOM binding
///
/// Each test builds the contact form inside its own container, attaches the
/// validator, dispatches real events and counts the markers on the page.

use landing_form_core::FormConfig;
use landing_form_wasm::attach_form_validator;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const TEXT_CONTROLS: &str = r#"
    <input id="name" type="text">
    <input id="furigana" type="text">
    <input id="email" type="email">
    <input id="phone" type="tel">
    <select id="occupation">
        <option value="">選択してください</option>
        <option value="会社員">会社員</option>
    </select>
"#;

const FILLED_TEXT_CONTROLS: &str = r#"
    <input id="name" type="text" value="田中 太郎">
    <input id="furigana" type="text" value="たなか たろう">
    <input id="email" type="email" value="a@b.com">
    <input id="phone" type="tel" value="090-1234-5678">
    <select id="occupation">
        <option value="会社員" selected>会社員</option>
    </select>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount `<form id=form_id>{controls}{consent}</form>` in a fresh container
fn mount(form_id: &str, controls: &str, consent: &str) -> Element {
    let document = document();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(&format!(
        r#"<form id="{}">{}{}<button type="submit">送信</button></form>"#,
        form_id, controls, consent
    ));
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn attach(form_id: &str) -> Result<(), JsValue> {
    let mut config = FormConfig::default();
    config.form.form_id = form_id.to_string();
    attach_form_validator(
        config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .unwrap(),
    )
}

fn dispatch(id: &str, event: &str) {
    let target = document().get_element_by_id(id).unwrap();
    target.dispatch_event(&Event::new(event).unwrap()).unwrap();
}

fn markers(container: &Element) -> Vec<Element> {
    let nodes = container.query_selector_all(".error-message").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

fn field_of(marker: &Element) -> String {
    marker.get_attribute("data-field").unwrap_or_default()
}

#[wasm_bindgen_test]
fn test_repeated_submit_keeps_one_marker_per_failure() {
    let container = mount(
        "wrappedConsentForm",
        TEXT_CONTROLS,
        r#"<label><input id="privacy" type="checkbox"> 同意する</label>"#,
    );
    attach("wrappedConsentForm").unwrap();

    dispatch("wrappedConsentForm", "submit");
    dispatch("wrappedConsentForm", "submit");

    let found: Vec<String> = markers(&container).iter().map(field_of).collect();
    assert_eq!(
        found,
        vec!["name", "furigana", "email", "phone", "occupation", "privacy"]
    );

    let name = document()
        .get_element_by_id("name")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert!(!name.style().get_property_value("border-color").unwrap().is_empty());

    container.remove();
}

#[wasm_bindgen_test]
fn test_checkbox_directly_in_form_does_not_leave_stale_markers() {
    let container = mount(
        "bareConsentForm",
        FILLED_TEXT_CONTROLS,
        r#"<input id="privacy" type="checkbox">"#,
    );
    attach("bareConsentForm").unwrap();

    dispatch("bareConsentForm", "submit");
    dispatch("bareConsentForm", "submit");
    dispatch("bareConsentForm", "submit");

    let found = markers(&container);
    assert_eq!(found.len(), 1);
    assert_eq!(field_of(&found[0]), "privacy");

    let form = document().get_element_by_id("bareConsentForm").unwrap();
    assert!(form.contains(Some(found[0].as_ref())));

    container.remove();
}

#[wasm_bindgen_test]
fn test_editing_field_removes_its_marker() {
    let container = mount(
        "editedForm",
        TEXT_CONTROLS,
        r#"<label><input id="privacy" type="checkbox"> 同意する</label>"#,
    );
    attach("editedForm").unwrap();

    dispatch("editedForm", "submit");
    assert_eq!(markers(&container).len(), 6);

    let email = document()
        .get_element_by_id("email")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    email.set_value("a@b.com");
    dispatch("email", "input");

    let found: Vec<String> = markers(&container).iter().map(field_of).collect();
    assert_eq!(found.len(), 5);
    assert!(!found.contains(&"email".to_string()));

    container.remove();
}

#[wasm_bindgen_test]
fn test_attach_rejects_multi_token_error_class() {
    let container = mount(
        "badClassForm",
        TEXT_CONTROLS,
        r#"<input id="privacy" type="checkbox">"#,
    );
    let mut config = FormConfig::default();
    config.form.form_id = "badClassForm".to_string();
    config.form.error_class = "error message".to_string();

    let result = attach_form_validator(
        config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .unwrap(),
    );
    assert!(result.is_err());

    container.remove();
}

#[wasm_bindgen_test]
fn test_attach_reports_missing_form() {
    assert!(attach("noSuchForm").is_err());
}
