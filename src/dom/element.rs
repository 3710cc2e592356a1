// ============================================================================
// ELEMENT HELPERS - Thin wrappers over web-sys
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, Window};
use crate::config::PageLocation;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn get_html_element_by_id(id: &str) -> Option<HtmlElement> {
    get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn get_input_by_id(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

pub fn get_button_by_id(id: &str) -> Option<HtmlButtonElement> {
    get_element_by_id(id)?.dyn_into::<HtmlButtonElement>().ok()
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// `display: block` / `display: none`
pub fn set_visible(element: &HtmlElement, visible: bool) -> Result<(), JsValue> {
    element
        .style()
        .set_property("display", if visible { "block" } else { "none" })
}

pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

pub fn remove_classes(element: &Element, classes: &[&str]) -> Result<(), JsValue> {
    for class in classes {
        element.class_list().remove_1(class)?;
    }
    Ok(())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Attribute on `<html>`
pub fn set_root_attribute(name: &str, value: &str) -> Result<(), JsValue> {
    document()
        .and_then(|doc| doc.document_element())
        .ok_or_else(|| JsValue::from_str("No document element"))?
        .set_attribute(name, value)
}

/// Optional string property on `window` (page-level overrides)
fn window_string(key: &str) -> Option<String> {
    let win = window()?;
    let value = js_sys::Reflect::get(&win, &JsValue::from_str(key)).ok()?;
    if let Some(s) = value.as_string() {
        return Some(s);
    }
    value.as_f64().map(|n| n.to_string())
}

pub fn page_location() -> PageLocation {
    let location = window().map(|w| w.location());
    PageLocation {
        protocol: location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .unwrap_or_else(|| "http:".to_string()),
        hostname: location
            .as_ref()
            .and_then(|l| l.hostname().ok())
            .unwrap_or_default(),
        base_url_override: window_string("API_BASE_URL"),
        port_override: window_string("API_PORT"),
    }
}

pub fn prefers_light_scheme() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .is_some_and(|mql| mql.matches())
}

pub fn navigate(href: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(href)
}
