use crate::utils::get_window;

/// Blocking yes/no prompts and notices shown to the user.
pub trait Dialogs {
    /// Return `true` only if the user explicitly agreed.
    fn confirm(&self, message: &str) -> bool;

    fn notify(&self, message: &str);
}

/// Native `window.confirm` and `window.alert`.
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        match get_window().and_then(|window| Ok(window.confirm_with_message(message)?)) {
            Ok(confirmed) => confirmed,
            Err(error) => {
                log::error!("Can't display confirmation: {error:?}");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        if let Err(error) = get_window().and_then(|window| Ok(window.alert_with_message(message)?))
        {
            log::error!("Can't display alert: {error:?}");
        }
    }
}
