//! Thin helpers over web-sys for the lookups the host repeats

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Elements matching `selector` whose `data-<name>` equals `value`
pub fn query_by_data(document: &Document, selector: &str, name: &str, value: &str) -> Vec<Element> {
    query_all(document, selector)
        .into_iter()
        .filter(|el| data(el, name).as_deref() == Some(value))
        .collect()
}

/// Read a `data-*` attribute
pub fn data(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{name}"))
}

/// Element the event fired on
pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Nearest ancestor-or-self of the event target matching `selector`
pub fn closest(event: &Event, selector: &str) -> Option<Element> {
    event_element(event)?.closest(selector).ok().flatten()
}

pub fn as_html(el: Element) -> Option<HtmlElement> {
    el.dyn_into::<HtmlElement>().ok()
}
