//! Reads and writes on the server-rendered page around the app.

use wasm_bindgen::JsCast;
use web_sys::{Element, FileList, HtmlElement, HtmlInputElement};

use crate::config::CSRF_FIELD;
use crate::{AppError, AppResult};

/// Element with the given id, as an `HtmlElement` suitable for mounting.
pub fn mount_point(id: &str) -> Option<HtmlElement> {
    gloo_utils::document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Non-empty attribute value, or a page error naming what is missing.
pub fn required_attribute(element: &Element, name: &str) -> AppResult<String> {
    element
        .get_attribute(name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Page(format!("#{} has no {}", element.id(), name)))
}

/// CSRF token from the hidden input the server renders into the page.
pub fn csrf_token() -> AppResult<String> {
    let selector = format!("[name={}]", CSRF_FIELD);
    gloo_utils::document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .ok_or_else(|| AppError::Page(format!("missing {} input", CSRF_FIELD)))
}

/// Collects a `FileList` from a picker or a drop.
pub fn files_from_list(list: &FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Full-page navigation.
pub fn navigate(url: &str) {
    log::info!("➡️  Redirecting to {}", url);
    if let Err(e) = gloo_utils::window().location().set_href(url) {
        log::error!("Navigation to {} failed: {:?}", url, e);
    }
}
