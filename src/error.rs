use std::fmt::{Debug, Display, Formatter};
use wasm_bindgen::JsValue;
use web_sys::{Element, Node};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An internal failure, written to the console and never shown to the user.
pub struct Error {
    msg: String,
    parent: Option<Box<Error>>,
}

impl Error {
    pub fn new(msg: &str) -> Self {
        Self {
            msg: msg.to_owned(),
            parent: None,
        }
    }

    pub fn from_parent(msg: &str, parent: Error) -> Self {
        Self {
            msg: msg.to_owned(),
            parent: Some(Box::new(parent)),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.parent {
            None => {
                write!(f, "{}", self.msg)
            }
            Some(parent) => {
                write!(f, "{}: caused by:\n{:?}", self.msg, parent)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::new(
            &value
                .as_string()
                .unwrap_or_else(|| format!("Unknown error has happened: {value:?}")),
        )
    }
}

impl From<Element> for Error {
    fn from(element: Element) -> Self {
        Self::new(&format!("A cast has failed for element: {element:?}"))
    }
}

impl From<Node> for Error {
    fn from(node: Node) -> Self {
        Self::new(&format!("A cast has failed for node: {node:?}"))
    }
}

pub fn log_if_error(result: Result<()>) {
    if let Err(error) = result {
        log::error!("{error:?}");
    }
}
