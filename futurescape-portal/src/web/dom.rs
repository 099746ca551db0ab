//! Thin typed wrappers over `web_sys` lookups, listeners and observers.

use bevy::log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

use super::error::DomError;
use crate::animation::style_effect::StyleDeclaration;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn query(selector: &str) -> Result<Element, DomError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement(selector.to_string()))
}

/// Look up an element that the page may legitimately omit.
pub fn query_optional<T: JsCast>(selector: &str) -> Option<T> {
    match query(selector).and_then(|element| cast::<T>(element, selector)) {
        Ok(element) => Some(element),
        Err(error) => {
            warn!("{}", error);
            None
        }
    }
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(document()?.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn cast<T: JsCast>(element: Element, selector: &str) -> Result<T, DomError> {
    element
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElementType {
            selector: selector.to_string(),
            expected: std::any::type_name::<T>()
                .rsplit("::")
                .next()
                .unwrap_or("element"),
        })
}

pub fn html_elements(list: Vec<Element>, selector: &str) -> Vec<HtmlElement> {
    list.into_iter()
        .filter_map(|element| cast::<HtmlElement>(element, selector).ok())
        .collect()
}

pub fn create(document: &Document, tag: &str, class: &str) -> Result<Element, DomError> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), DomError> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn apply_styles(element: &HtmlElement, declarations: &[StyleDeclaration]) -> Result<(), DomError> {
    let style = element.style();
    for (property, value) in declarations {
        style.set_property(property, value)?;
    }
    Ok(())
}

pub fn clear_styles(element: &HtmlElement, properties: &[&str]) -> Result<(), DomError> {
    let style = element.style();
    for property in properties {
        style.remove_property(property)?;
    }
    Ok(())
}

/// Attach a listener for the page lifetime.
pub fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

/// Create an intersection observer that fires at a single visibility
/// threshold.
pub fn observe_visibility(
    threshold: f64,
    mut handler: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, DomError> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(&entry, &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
    closure.forget();
    Ok(observer)
}

/// Index stored on an element in a `data-*` attribute.
pub fn index_attribute(element: &Element, attribute: &str) -> Option<usize> {
    element.get_attribute(attribute)?.parse().ok()
}
