//! Thin wrappers over the browser APIs the components touch outside their
//! own rendered tree: window scrolling, the root element and `<body>`.
//! Failures are logged and otherwise ignored; none of them are fatal.

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::scroll_spy::SectionBounds;

pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// `(scrollHeight, innerHeight)` of the current document.
pub fn document_extent() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (scroll_height, viewport)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Scrolls so the section's top edge sits `offset` pixels below the
/// viewport top. Returns false when no such section exists.
pub fn scroll_to_section(id: &str, offset: f64) -> bool {
    match element_by_id(id) {
        Some(section) => {
            smooth_scroll_to(section.offset_top() as f64 - offset);
            true
        }
        None => {
            log::warn!("No section #{} to scroll to", id);
            false
        }
    }
}

pub fn scroll_into_view(id: &str) {
    match element_by_id(id) {
        Some(section) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No section #{} to scroll into view", id),
    }
}

pub fn section_bounds(ids: &[String]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| {
            element_by_id(id).map(|el| SectionBounds {
                id: id.clone(),
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = body() {
        if body.style().set_property("overflow", value).is_err() {
            log::warn!("Could not set body overflow to {}", value);
        }
    }
}

pub fn set_body_class(class: &str, on: bool) {
    match body() {
        Some(body) => {
            if body.class_list().toggle_with_force(class, on).is_err() {
                log::warn!("Could not toggle body class {}", class);
            }
        }
        None => log::warn!("No body to toggle {} on", class),
    }
}

pub fn root_attribute(name: &str) -> Option<String> {
    window()?.document()?.document_element()?.get_attribute(name)
}

pub fn set_root_attribute(name: &str, value: &str) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if root.set_attribute(name, value).is_err() {
                log::warn!("Could not set {}={} on the root element", name, value);
            }
        }
        None => log::warn!("No root element to set {} on", name),
    }
}
