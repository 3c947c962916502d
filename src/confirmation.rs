use crate::Result;
use crate::dialog::Dialogs;
use crate::utils::{add_event_listener, class_names, query_selector_all};
use std::rc::Rc;
use ui_rules::confirmation::{ButtonData, ButtonRole, confirmation_message};
use web_sys::{Element, Event};

/// Ask for confirmation before any role button performs its action.
/// Returns the number of bound buttons.
pub fn bind_confirmations(root: &Element, dialogs: Rc<dyn Dialogs>) -> Result<usize> {
    let buttons = query_selector_all(root, &ButtonRole::selector())?;
    let mut bound = 0;
    for button in buttons {
        let classes = class_names(&button);
        let Some(role) = ButtonRole::from_classes(classes.iter().map(String::as_str)) else {
            continue;
        };

        let dialogs = dialogs.clone();
        let target = button.clone();
        add_event_listener(&button, "click", move |event: Event| {
            on_role_button_click(&event, &target, role, dialogs.as_ref());
        })?;
        bound += 1;
    }

    Ok(bound)
}

fn on_role_button_click(event: &Event, button: &Element, role: ButtonRole, dialogs: &dyn Dialogs) {
    let message = confirmation_message(role, &read_button_data(button));
    if !dialogs.confirm(&message) {
        event.prevent_default();
    }
}

fn read_button_data(button: &Element) -> ButtonData {
    let attribute = |name: &str| button.get_attribute(name);
    ButtonData::new(
        attribute("data-title").unwrap_or_default(),
        attribute("data-username")
            .or_else(|| attribute("data-name"))
            .unwrap_or_default(),
        attribute("data-current-role").unwrap_or_default(),
    )
}
