use crate::Result;
use crate::dialog::Dialogs;
use crate::utils::{add_event_listener, query_selector};
use std::rc::Rc;
use ui_rules::form::{Feedback, FieldSpec, FormOutcome, FormSpec, VALIDATED_FORMS};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

struct BoundField {
    spec: &'static FieldSpec,
    input: HtmlInputElement,
    error_element: Option<HtmlElement>,
}

/// Guard the submission of every known form present under `root`.
/// A form that can't be bound is logged and skipped. Returns the number of bound forms.
pub fn bind_form_validations(root: &Element, dialogs: Rc<dyn Dialogs>) -> usize {
    let mut bound = 0;
    for form_spec in VALIDATED_FORMS {
        match bind_form_validation(root, form_spec, dialogs.clone()) {
            Ok(true) => bound += 1,
            Ok(false) => {}
            Err(error) => log::error!(
                "Can't bind validation of form `{}`: {error:?}",
                form_spec.id
            ),
        }
    }

    bound
}

/// Returns `false` when the form is not on the page.
pub fn bind_form_validation(
    root: &Element,
    form_spec: &'static FormSpec,
    dialogs: Rc<dyn Dialogs>,
) -> Result<bool> {
    let Some(form) = query_selector(root, &format!("#{}", form_spec.id))? else {
        return Ok(false);
    };

    let mut fields = vec![];
    for field_spec in form_spec.fields {
        let Some(input) = query_selector(&form, &format!("#{}", field_spec.id))? else {
            log::warn!(
                "Field `{}` is missing from form `{}`, it won't be checked",
                field_spec.id,
                form_spec.id
            );
            continue;
        };
        let error_element = find_error_element(root, &form, field_spec)?;
        fields.push(BoundField {
            spec: field_spec,
            input: input.dyn_into::<HtmlInputElement>()?,
            error_element,
        });
    }

    add_event_listener(&form, "submit", move |event: Event| {
        on_submit(&event, form_spec, &fields, dialogs.as_ref());
    })?;
    log::debug!("Validation bound to form `{}`", form_spec.id);

    Ok(true)
}

/// Look inside the form first, as several forms of a page may share field ids.
fn find_error_element(
    root: &Element,
    form: &Element,
    field_spec: &FieldSpec,
) -> Result<Option<HtmlElement>> {
    let selector = format!("#{}", field_spec.error_element_id());
    let element = match query_selector(form, &selector)? {
        Some(element) => Some(element),
        None => query_selector(root, &selector)?,
    };

    Ok(element
        .map(|element| element.dyn_into::<HtmlElement>())
        .transpose()?)
}

fn on_submit(event: &Event, form_spec: &FormSpec, fields: &[BoundField], dialogs: &dyn Dialogs) {
    let outcome = form_spec.validate(|spec| {
        fields
            .iter()
            .find(|field| field.spec == spec)
            .map(|field| field.input.value())
    });

    if let Feedback::Inline = form_spec.feedback {
        show_inline_errors(&outcome, fields);
    }

    if !outcome.is_valid() {
        event.prevent_default();
        if let Feedback::Alert(message) = form_spec.feedback {
            dialogs.notify(message);
        }
    }
}

fn show_inline_errors(outcome: &FormOutcome<'_>, fields: &[BoundField]) {
    for field_outcome in &outcome.fields {
        let error_element = fields
            .iter()
            .find(|field| field.spec == field_outcome.field)
            .and_then(|field| field.error_element.as_ref());
        if let Some(error_element) = error_element {
            let display = if field_outcome.valid { "none" } else { "block" };
            if let Err(error) = error_element.style().set_property("display", display) {
                log::error!("Can't toggle error of field `{}`: {error:?}", field_outcome.field.id);
            }
        }
    }
}
