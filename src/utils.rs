use crate::Result;
use crate::error::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window()
        .ok_or_else(|| Error::new("no global `window` exists"))
}

pub fn get_document() -> Result<Document> {
    get_window()?
        .document()
        .ok_or_else(|| Error::new("should have a document on window"))
}

pub fn query_selector(root: &Element, selector: &str) -> Result<Option<Element>> {
    Ok(root.query_selector(selector)?)
}

pub fn query_selector_all(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(node) = nodes.get(index) {
            elements.push(node.dyn_into::<Element>()?);
        }
    }

    Ok(elements)
}

pub fn add_class(element: &Element, class: &str) -> Result<()> {
    Ok(element.class_list().add_1(class)?)
}

pub fn remove_class(element: &Element, class: &str) -> Result<()> {
    Ok(element.class_list().remove_1(class)?)
}

pub fn class_names(element: &Element) -> Vec<String> {
    element
        .class_name()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Attach a listener that lives as long as the page.
pub fn add_event_listener<F>(target: &EventTarget, event_type: &str, listener: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(listener) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}
