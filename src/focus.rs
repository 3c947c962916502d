use crate::Result;
use crate::utils::{add_class, add_event_listener, query_selector_all, remove_class};
use ui_rules::field_rule::is_not_blank;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

const STYLED_INPUTS: &str = r#"input[type="text"], input[type="email"], input[type="password"]"#;

/// Mark the container of a text-like input while it is focused or filled.
/// Returns the number of bound inputs.
pub fn bind_focus_styling(root: &Element, focused_class: &str) -> Result<usize> {
    let inputs = query_selector_all(root, STYLED_INPUTS)?;
    let count = inputs.len();
    for input in inputs {
        let input = input.dyn_into::<HtmlInputElement>()?;

        let (target, class) = (input.clone(), focused_class.to_owned());
        add_event_listener(&input, "focus", move |_| {
            if let Some(container) = target.parent_element() {
                if let Err(error) = add_class(&container, &class) {
                    log::error!("Can't mark field as focused: {error:?}");
                }
            }
        })?;

        let (target, class) = (input.clone(), focused_class.to_owned());
        add_event_listener(&input, "blur", move |_| {
            if is_not_blank(&target.value()) {
                return;
            }
            if let Some(container) = target.parent_element() {
                if let Err(error) = remove_class(&container, &class) {
                    log::error!("Can't unmark field: {error:?}");
                }
            }
        })?;
    }

    Ok(count)
}
