use crate::Result;
use crate::utils::{add_event_listener, query_selector, query_selector_all};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlButtonElement};

/// Disable the submit button of every form whose submission was not cancelled.
/// Must be bound after the validations so it can see their cancellation.
pub fn bind_submit_lock(root: &Element, processing_label: &str) -> Result<usize> {
    let forms = query_selector_all(root, "form")?;
    let count = forms.len();
    for form in forms {
        let (target, label) = (form.clone(), processing_label.to_owned());
        add_event_listener(&form, "submit", move |event: Event| {
            if event.default_prevented() {
                return;
            }
            if let Err(error) = lock_submit_button(&target, &label) {
                log::error!("Can't disable submit button: {error:?}");
            }
        })?;
    }

    Ok(count)
}

fn lock_submit_button(form: &Element, label: &str) -> Result<()> {
    if let Some(button) = query_selector(form, r#"button[type="submit"]"#)? {
        let button = button.dyn_into::<HtmlButtonElement>()?;
        button.set_disabled(true);
        button.set_text_content(Some(label));
    }

    Ok(())
}
