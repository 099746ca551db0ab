//! DOM bridge error type.

use std::fmt;

/// Errors produced while wiring or projecting onto the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// No `window` global (not running in a browser main thread).
    NoWindow,
    /// Window without a document.
    NoDocument,
    /// Selector matched nothing.
    MissingElement(String),
    /// Element exists but is not of the expected interface.
    WrongElementType {
        selector: String,
        expected: &'static str,
    },
    /// A DOM call threw.
    Js(String),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => f.write_str("no window available"),
            Self::NoDocument => f.write_str("window has no document"),
            Self::MissingElement(selector) => write!(f, "no element matches `{selector}`"),
            Self::WrongElementType { selector, expected } => {
                write!(f, "`{selector}` is not an {expected}")
            }
            Self::Js(message) => write!(f, "DOM call failed: {message}"),
        }
    }
}

impl std::error::Error for DomError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
