//! Thin helpers over web-sys DOM traversal.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, NodeList};

/// Anything that can be searched with a CSS selector: the whole document or one container.
pub trait QueryRoot {
    fn select_all(&self, selectors: &str) -> Result<NodeList, JsValue>;
}

impl QueryRoot for Document {
    fn select_all(&self, selectors: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selectors)
    }
}

impl QueryRoot for Element {
    fn select_all(&self, selectors: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selectors)
    }
}

/// Iterate the element nodes of a `NodeList`.
pub fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(move |index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

/// Attach a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<js_sys::Function>())?;
    // Released only when the document is torn down.
    closure.forget();
    Ok(())
}

/// Attribute recording which behaviors already have listeners on an element.
pub const BOUND_ATTRIBUTE: &str = "data-inventory-bound";

/// Whether `element` already carries listeners for `behavior`.
pub fn is_bound(element: &Element, behavior: &str) -> bool {
    element
        .get_attribute(BOUND_ATTRIBUTE)
        .is_some_and(|value| has_token(&value, behavior))
}

/// Record that `element` now carries listeners for `behavior`.
pub fn mark_bound(element: &Element, behavior: &str) -> Result<(), JsValue> {
    let existing = element.get_attribute(BOUND_ATTRIBUTE);
    match with_token(existing.as_deref(), behavior) {
        Some(value) => element.set_attribute(BOUND_ATTRIBUTE, &value),
        None => Ok(()),
    }
}

fn has_token(value: &str, token: &str) -> bool {
    value.split_whitespace().any(|existing| existing == token)
}

/// Token list with `token` appended, or `None` when it is already present.
fn with_token(existing: Option<&str>, token: &str) -> Option<String> {
    match existing {
        Some(value) if has_token(value, token) => None,
        Some(value) if !value.trim().is_empty() => Some(format!("{} {}", value.trim(), token)),
        _ => Some(token.to_string()),
    }
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}
