use crate::Result;
use crate::error::Error;
use crate::confirmation::bind_confirmations;
use crate::dialog::Dialogs;
use crate::flash::{FlashDismissal, schedule_flash_dismissals};
use crate::focus::bind_focus_styling;
use crate::scheduler::Scheduler;
use crate::submit_lock::bind_submit_lock;
use crate::validation::bind_form_validations;
use std::rc::Rc;
use ui_rules::config::UiConfig;
use web_sys::Element;

/// Interactions bound to a page. Dropping it leaves listeners in place;
/// call [`PageBindings::teardown`] to cancel the pending flash message timers.
pub struct PageBindings {
    scheduler: Rc<dyn Scheduler>,
    dismissals: Vec<FlashDismissal>,
}

impl PageBindings {
    pub fn pending_dismissals(&self) -> usize {
        self.dismissals
            .iter()
            .filter(|dismissal| dismissal.is_pending())
            .count()
    }

    pub fn teardown(&self) {
        self.dismissals
            .iter()
            .for_each(|dismissal| dismissal.cancel(&*self.scheduler));
    }
}

/// Bind every interaction to the markup under `root`.
/// Each interaction is bound on its own: a failure is logged and the others are still bound.
pub fn bind_page(
    root: &Element,
    dialogs: Rc<dyn Dialogs>,
    scheduler: Rc<dyn Scheduler>,
    config: &UiConfig,
) -> PageBindings {
    let buttons = bind_or_log("confirmations", bind_confirmations(root, dialogs.clone()));
    // Validation listeners must come before the submit lock ones.
    let forms = bind_form_validations(root, dialogs);
    let locked_forms = bind_or_log(
        "submit lock",
        bind_submit_lock(root, config.processing_label()),
    );
    let inputs = bind_or_log(
        "focus styling",
        bind_focus_styling(root, config.focused_class()),
    );
    let dismissals = bind_or_log(
        "flash messages",
        schedule_flash_dismissals(root, scheduler.clone(), config),
    );

    log::debug!(
        "Page bound: {buttons} confirmation buttons, {forms} validated forms, {locked_forms} locked forms, {inputs} styled inputs, {} flash messages",
        dismissals.len()
    );

    PageBindings {
        scheduler,
        dismissals,
    }
}

fn bind_or_log<T: Default>(interaction: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|error| {
        log::error!(
            "{:?}",
            Error::from_parent(&format!("Can't bind {interaction}"), error)
        );
        T::default()
    })
}
