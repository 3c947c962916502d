use crate::Result;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::utils::{add_class, query_selector_all};
use std::cell::Cell;
use std::rc::Rc;
use ui_rules::config::{FADE_DELAY_MS, REMOVAL_DELAY_MS, UiConfig};
use web_sys::Element;

/// The pending fade or removal task of a single flash message.
pub struct FlashDismissal {
    pending: Rc<Cell<Option<TaskHandle>>>,
}

impl FlashDismissal {
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn cancel(&self, scheduler: &dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}

/// Fade every flash message out after [`FADE_DELAY_MS`], then remove it [`REMOVAL_DELAY_MS`] later.
pub fn schedule_flash_dismissals(
    root: &Element,
    scheduler: Rc<dyn Scheduler>,
    config: &UiConfig,
) -> Result<Vec<FlashDismissal>> {
    query_selector_all(root, config.flash_selector())?
        .into_iter()
        .map(|message| schedule_dismissal(message, scheduler.clone(), config))
        .collect()
}

fn schedule_dismissal(
    message: Element,
    scheduler: Rc<dyn Scheduler>,
    config: &UiConfig,
) -> Result<FlashDismissal> {
    let pending = Rc::new(Cell::new(None));
    let fade_class = config.fade_class().clone();

    let fade = {
        let pending = pending.clone();
        let scheduler_in_task = scheduler.clone();
        Box::new(move || {
            if let Err(error) = add_class(&message, &fade_class) {
                log::error!("Can't fade flash message: {error:?}");
            }
            let removal = {
                let pending = pending.clone();
                Box::new(move || {
                    message.remove();
                    pending.set(None);
                })
            };
            match scheduler_in_task.schedule(REMOVAL_DELAY_MS, removal) {
                Ok(handle) => pending.set(Some(handle)),
                Err(error) => {
                    log::error!("Can't schedule flash message removal: {error:?}");
                    pending.set(None);
                }
            }
        })
    };

    let handle = scheduler.schedule(FADE_DELAY_MS, fade)?;
    pending.set(Some(handle));

    Ok(FlashDismissal { pending })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, create_root};
    use crate::utils::{class_names, query_selector};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const MESSAGES: &str = r#"
        <div class="alert alert-success" id="first">Book lent</div>
        <div class="alert alert-danger" id="second">Book unavailable</div>
        <p id="other">Not a flash message</p>
    "#;

    fn is_present(root: &Element, id: &str) -> bool {
        query_selector(root, &format!("#{id}")).unwrap().is_some()
    }

    #[wasm_bindgen_test]
    fn should_fade_then_remove_messages() {
        let root = create_root(MESSAGES);
        let scheduler = Rc::new(ManualScheduler::default());

        let dismissals =
            schedule_flash_dismissals(&root, scheduler.clone(), &UiConfig::default()).unwrap();
        assert_eq!(2, dismissals.len());

        scheduler.advance(2999);
        assert!(is_present(&root, "first"));
        assert!(!class_names(&query_selector(&root, "#first").unwrap().unwrap())
            .contains(&"fade".to_owned()));

        scheduler.advance(1);
        let first = query_selector(&root, "#first").unwrap().unwrap();
        assert!(class_names(&first).contains(&"fade".to_owned()));
        assert!(dismissals.iter().all(FlashDismissal::is_pending));

        scheduler.advance(499);
        assert!(is_present(&root, "second"));

        scheduler.advance(1);
        assert!(!is_present(&root, "first"));
        assert!(!is_present(&root, "second"));
        assert!(is_present(&root, "other"));
        assert!(!dismissals.iter().any(FlashDismissal::is_pending));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn should_keep_message_when_cancelled_before_fading() {
        let root = create_root(MESSAGES);
        let scheduler = Rc::new(ManualScheduler::default());
        let dismissals =
            schedule_flash_dismissals(&root, scheduler.clone(), &UiConfig::default()).unwrap();

        dismissals
            .iter()
            .for_each(|dismissal| dismissal.cancel(&*scheduler));
        scheduler.advance(10_000);

        assert!(is_present(&root, "first"));
        assert!(is_present(&root, "second"));
        assert_eq!(0, scheduler.pending());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn should_cancel_removal_once_faded() {
        let root = create_root(MESSAGES);
        let scheduler = Rc::new(ManualScheduler::default());
        let dismissals =
            schedule_flash_dismissals(&root, scheduler.clone(), &UiConfig::default()).unwrap();

        scheduler.advance(3200);
        dismissals
            .iter()
            .for_each(|dismissal| dismissal.cancel(&*scheduler));
        scheduler.advance(10_000);

        assert!(is_present(&root, "first"));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn should_follow_configured_selector_and_class() {
        let root = create_root(MESSAGES);
        let scheduler = Rc::new(ManualScheduler::default());
        let config =
            UiConfig::from_json(r#"{"flash_selector":".alert-danger","fade_class":"hide"}"#)
                .unwrap();

        let dismissals = schedule_flash_dismissals(&root, scheduler.clone(), &config).unwrap();
        scheduler.advance(3000);

        assert_eq!(1, dismissals.len());
        let second = query_selector(&root, "#second").unwrap().unwrap();
        assert!(class_names(&second).contains(&"hide".to_owned()));

        scheduler.advance(500);
        assert!(is_present(&root, "first"));
        assert!(!is_present(&root, "second"));
        root.remove();
    }
}
