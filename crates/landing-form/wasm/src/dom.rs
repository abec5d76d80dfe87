//! `FormPage` over the real DOM
//!
//! Markers are `<p class="{error_class}" data-form="{form_id}" data-field="{id}">`
//! elements inserted right after the field, or after the checkbox's wrapper
//! for consent when that wrapper is inside the form. They are looked up
//! document-wide, so removal finds them wherever they were placed.

use std::collections::BTreeMap;

use landing_form_core::{FieldId, FieldKind, FieldReader, FormPage, ValidationFailure};
use landing_form_core::config::FormSection;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::error::BindError;

const BORDER_PROPERTY: &str = "border-color";

pub struct DomFormPage {
    window: Window,
    document: Document,
    form: HtmlFormElement,
    fields: BTreeMap<FieldId, Element>,
    form_id: String,
    error_class: String,
}

fn escape_attr(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

impl DomFormPage {
    /// Look up the form and its six controls
    pub fn bind(section: &FormSection) -> Result<Self, BindError> {
        let window = web_sys::window().ok_or(BindError::NoWindow)?;
        let document = window.document().ok_or(BindError::NoDocument)?;

        let form = document
            .get_element_by_id(&section.form_id)
            .ok_or_else(|| BindError::MissingElement(section.form_id.clone()))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| BindError::WrongElement {
                id: section.form_id.clone(),
                expected: "form",
            })?;

        let mut fields = BTreeMap::new();
        for field in FieldId::ALL {
            let element = document
                .get_element_by_id(field.as_str())
                .ok_or_else(|| BindError::MissingElement(field.as_str().to_string()))?;
            if field.kind() == FieldKind::Consent && !element.is_instance_of::<HtmlInputElement>() {
                return Err(BindError::WrongElement {
                    id: field.as_str().to_string(),
                    expected: "checkbox input",
                });
            }
            fields.insert(field, element);
        }

        Ok(Self {
            window,
            document,
            form,
            fields,
            form_id: section.form_id.clone(),
            error_class: section.error_class.clone(),
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub fn element(&self, field: FieldId) -> Option<&Element> {
        self.fields.get(&field)
    }

    fn marker_selector(&self, field: Option<FieldId>) -> String {
        let base = format!(
            ".{}[data-form=\"{}\"]",
            self.error_class,
            escape_attr(&self.form_id)
        );
        match field {
            Some(field) => format!("{}[data-field=\"{}\"]", base, field),
            None => base,
        }
    }

    fn remove_markers(&self, field: Option<FieldId>) -> Result<(), JsValue> {
        let nodes = self.document.query_selector_all(&self.marker_selector(field))?;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                element.remove();
            }
        }
        Ok(())
    }

    fn set_border(&self, field: FieldId, color: Option<&str>) -> Result<(), JsValue> {
        let Some(element) = self.fields.get(&field).and_then(|e| e.dyn_ref::<HtmlElement>()) else {
            return Ok(());
        };
        let style = element.style();
        match color {
            Some(color) => style.set_property(BORDER_PROPERTY, color),
            None => style.remove_property(BORDER_PROPERTY).map(|_| ()),
        }
    }

    fn insert_marker(&self, failure: &ValidationFailure) -> Result<(), JsValue> {
        let Some(field) = self.fields.get(&failure.field) else {
            return Ok(());
        };

        // The consent checkbox usually sits inside its label
        let form: &Node = self.form.as_ref();
        let anchor = match (failure.field.kind(), field.parent_element()) {
            (FieldKind::Consent, Some(wrapper))
                if !wrapper.is_same_node(Some(form)) && form.contains(Some(wrapper.as_ref())) =>
            {
                wrapper
            }
            _ => field.clone(),
        };

        let marker = self.document.create_element("p")?;
        marker.set_class_name(&self.error_class);
        marker.set_attribute("data-form", &self.form_id)?;
        marker.set_attribute("data-field", failure.field.as_str())?;
        marker.set_text_content(Some(&failure.message));

        if let Some(parent) = anchor.parent_node() {
            parent.insert_before(&marker, anchor.next_sibling().as_ref())?;
        }
        Ok(())
    }
}

impl FieldReader for DomFormPage {
    fn text(&self, field: FieldId) -> String {
        let Some(element) = self.fields.get(&field) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            tracing::warn!(field = %field, "form control has no value");
            String::new()
        }
    }

    fn checked(&self, field: FieldId) -> bool {
        self.fields
            .get(&field)
            .and_then(|e| e.dyn_ref::<HtmlInputElement>())
            .map(|input| input.checked())
            .unwrap_or(false)
    }
}

impl FormPage for DomFormPage {
    fn clear_feedback(&mut self) {
        if let Err(err) = self.remove_markers(None) {
            tracing::warn!(error = ?err, "failed to remove error markers");
        }
        for field in FieldId::ALL {
            if let Err(err) = self.set_border(field, None) {
                tracing::warn!(field = %field, error = ?err, "failed to reset border");
            }
        }
    }

    fn clear_field_feedback(&mut self, field: FieldId) {
        let cleared = self
            .remove_markers(Some(field))
            .and_then(|_| self.set_border(field, None));
        if let Err(err) = cleared {
            tracing::warn!(field = %field, error = ?err, "failed to clear field marker");
        }
    }

    fn show_failure(&mut self, failure: &ValidationFailure, border_color: &str) {
        let shown = self
            .insert_marker(failure)
            .and_then(|_| self.set_border(failure.field, Some(border_color)));
        if let Err(err) = shown {
            tracing::warn!(field = %failure.field, error = ?err, "failed to render error marker");
        }
    }

    fn reveal(&mut self, field: FieldId) {
        let Some(element) = self.fields.get(&field) else {
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);

        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            if let Err(err) = html.focus() {
                tracing::warn!(field = %field, error = ?err, "failed to focus field");
            }
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or_else(|err| {
            tracing::warn!(error = ?err, "confirm dialog failed");
            false
        })
    }

    fn acknowledge(&mut self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!(error = ?err, "alert dialog failed");
        }
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}
