use crate::core::style;
use crate::core::StyleDecls;
use std::str::FromStr;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Collect the `HtmlElement`s matching `selector` below `root`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Read a numeric `data-*` attribute, logging and ignoring malformed values.
pub fn attr_number(el: &web::Element, name: &str) -> Option<f64> {
    let raw = el.get_attribute(name)?;
    match style::parse_number(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[dom] {name}: {e}");
            None
        }
    }
}

/// Read and parse a keyword attribute; falls back to `T::default()` when the
/// value is not understood.
pub fn attr_parsed<T>(el: &web::Element, name: &str) -> Option<T>
where
    T: FromStr<Err = style::ParseError> + Default,
{
    let raw = el.get_attribute(name)?;
    Some(raw.parse().unwrap_or_else(|e| {
        log::warn!("[dom] {name}: {e}");
        T::default()
    }))
}

pub fn attr_flag(el: &web::Element, name: &str) -> Option<bool> {
    el.get_attribute(name).map(|raw| style::parse_flag(&raw))
}

/// Query the whole document.
pub fn query_document(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    document
        .document_element()
        .map(|root| query_all(&root, selector))
        .unwrap_or_default()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn apply_styles(el: &web::HtmlElement, decls: &StyleDecls) {
    let css = el.style();
    for (property, value) in decls {
        _ = css.set_property(property, value);
    }
}

/// Create a `div` with the given class inside `parent`.
pub fn append_div(
    document: &web::Document,
    parent: &web::Element,
    class: &str,
) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_class_name(class);
    parent.append_child(&el).ok()?;
    Some(el)
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Document-relative top of `el` from the `offsetTop` chain. Unlike the
/// bounding rect this ignores CSS transforms applied to the element.
pub fn layout_top(el: &web::HtmlElement) -> f64 {
    let mut top = 0.0;
    let mut current = Some(el.clone());
    while let Some(node) = current {
        top += node.offset_top() as f64;
        current = node
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    top
}
