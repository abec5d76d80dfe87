//! Event wiring: submit runs the validator, editing a field drops its marker

use std::cell::RefCell;
use std::rc::Rc;

use landing_form_core::{FieldId, FieldKind, FormConfig, FormValidator, SubmitOutcome};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::dom::DomFormPage;
use crate::error::BindError;

/// Bind the validator to the configured form
///
/// Listeners live as long as the page, so their closures are leaked.
pub fn attach(config: &FormConfig) -> Result<(), BindError> {
    let validator = Rc::new(FormValidator::new(config)?);
    let page = Rc::new(RefCell::new(DomFormPage::bind(&config.form)?));

    let form: EventTarget = page.borrow().form().clone().into();
    {
        let validator = Rc::clone(&validator);
        let page = Rc::clone(&page);
        listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            let Ok(mut page) = page.try_borrow_mut() else {
                tracing::warn!("submit ignored while a previous one is still running");
                return;
            };
            if let SubmitOutcome::Rejected(result) = validator.handle_submit(&mut *page) {
                tracing::debug!(first = ?result.first().map(|f| f.field), "submission rejected");
            }
        })?;
    }

    for field in FieldId::ALL {
        let target = page
            .borrow()
            .element(field)
            .map(|e| e.clone().unchecked_into::<EventTarget>());
        let Some(target) = target else {
            continue;
        };
        let event_name = match field.kind() {
            FieldKind::Consent => "change",
            FieldKind::Text => "input",
        };
        let validator = Rc::clone(&validator);
        let page = Rc::clone(&page);
        listen(&target, event_name, move |_event: Event| {
            if let Ok(mut page) = page.try_borrow_mut() {
                validator.handle_input(&mut *page, field);
            }
        })?;
    }

    tracing::info!(form_id = %config.form.form_id, "contact form validator attached");
    Ok(())
}

fn listen<F>(target: &EventTarget, name: &str, handler: F) -> Result<(), BindError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .map_err(BindError::dom)?;
    closure.forget();
    Ok(())
}
