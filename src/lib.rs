mod confirmation;
mod dialog;
mod error;
mod flash;
mod focus;
mod page;
mod scheduler;
mod submit_lock;
mod utils;
mod validation;

#[cfg(test)]
mod testing;

pub use crate::dialog::{BrowserDialogs, Dialogs};
pub use crate::error::{Error, Result};
pub use crate::page::{PageBindings, bind_page};
pub use crate::scheduler::{BrowserScheduler, Scheduler, TaskHandle};

use crate::error::log_if_error;
use crate::utils::{add_event_listener, get_document};
use std::cell::RefCell;
use std::rc::Rc;
use ui_rules::config::UiConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

const CONFIG_ATTRIBUTE: &str = "data-ui-config";

thread_local! {
    static BINDINGS: RefCell<Option<PageBindings>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());
    log_if_error(bind_when_ready());
}

/// Cancel the pending flash message timers and forget the current bindings.
#[wasm_bindgen]
pub fn teardown_page() {
    match BINDINGS.with(|bindings| bindings.borrow_mut().take()) {
        Some(bindings) => bindings.teardown(),
        None => log::warn!("Page is not bound, nothing to tear down"),
    }
}

fn bind_when_ready() -> Result<()> {
    let document = get_document()?;
    if document.ready_state() == "loading" {
        add_event_listener(&document, "DOMContentLoaded", |_| {
            log_if_error(get_document().and_then(|document| bind_document(&document)));
        })
    } else {
        bind_document(&document)
    }
}

fn bind_document(document: &Document) -> Result<()> {
    if BINDINGS.with(|bindings| bindings.borrow().is_some()) {
        log::warn!("Page is already bound");
        return Ok(());
    }

    let root = document
        .document_element()
        .ok_or_else(|| Error::new("document has no root element"))?;
    let config = load_config(document);
    let bindings = bind_page(
        &root,
        Rc::new(BrowserDialogs),
        Rc::new(BrowserScheduler::default()),
        &config,
    );
    BINDINGS.with(|current| *current.borrow_mut() = Some(bindings));

    Ok(())
}

/// Read the configuration from `<body data-ui-config="...">`, falling back to defaults.
fn load_config(document: &Document) -> UiConfig {
    let Some(json) = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE))
    else {
        return UiConfig::default();
    };

    UiConfig::from_json(&json).unwrap_or_else(|error| {
        log::warn!("Ignoring `{CONFIG_ATTRIBUTE}`: {error}");
        UiConfig::default()
    })
}
