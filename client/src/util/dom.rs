//! DOM access helpers shared by the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers acquire their element handles once, at construction, through
//! these helpers. Lookups return `Option`/`Vec` instead of `Result` because a
//! missing element is an expected page variation, not an error: the owning
//! controller simply skips the feature.
//!
//! Listeners and observers registered here live for the page lifetime; their
//! closures are intentionally leaked with `forget()`.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, ScrollBehavior, ScrollToOptions,
};

use crate::state::reveal::OneShot;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element matching `selector`, if it is an `HtmlElement`.
pub fn find(doc: &Document, selector: &str) -> Option<HtmlElement> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn find_all(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    doc.query_selector_all(selector)
        .map_or_else(|_| Vec::new(), |list| html_elements(&list))
}

pub fn find_in(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn find_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map_or_else(|_| Vec::new(), |list| html_elements(&list))
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Set one inline style property. Invalid values are ignored by the browser.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn set_styles(el: &HtmlElement, declarations: &[(&str, &str)]) {
    let style = el.style();
    for (property, value) in declarations {
        let _ = style.set_property(property, value);
    }
}

/// Add or remove `class`. Class-list writes only fail for malformed tokens.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_attribute(el: &Element, name: &str, value: &str) {
    let _ = el.set_attribute(name, value);
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Animate the window scroll position to `top`.
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Height of the fixed header, used to offset anchor scrolling.
pub fn header_height(header: Option<&HtmlElement>) -> f64 {
    header.map_or(0.0, |h| f64::from(h.offset_height()))
}

/// Attach `handler` to `event` on `target` for the page lifetime.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let callback = Closure::<dyn FnMut(E)>::new(handler);
    if target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}

/// `document.readyState`: `"loading"`, `"interactive"`, or `"complete"`.
pub fn ready_state(doc: &Document) -> Option<String> {
    js_sys::Reflect::get(doc, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
}

/// Run `boot` once the document has been parsed.
pub fn on_document_ready(doc: &Document, boot: impl FnOnce() + 'static) {
    if ready_state(doc).as_deref() != Some("loading") {
        boot();
        return;
    }
    let mut boot = Some(boot);
    listen(doc, "DOMContentLoaded", move |_: web_sys::Event| {
        if let Some(boot) = boot.take() {
            boot();
        }
    });
}

pub fn supports_intersection_observer() -> bool {
    web_sys::window().is_some_and(|w| {
        js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    })
}

/// Observer tuning for [`observe_once`].
#[derive(Clone, Copy, Debug)]
pub struct ObserveOptions<'a> {
    pub threshold: f64,
    pub root_margin: Option<&'a str>,
}

/// Observe `targets` and call `on_visible(batch_index, element)` the first
/// time each one intersects. The element is unobserved before the callback
/// runs, so each target fires at most once.
///
/// `batch_index` is the entry's position in the observer batch that carried
/// it, which callers use for staggering.
///
/// # Errors
///
/// Returns the browser exception if the observer cannot be constructed.
pub fn observe_once(
    targets: Vec<HtmlElement>,
    options: ObserveOptions<'_>,
    mut on_visible: impl FnMut(usize, HtmlElement) + 'static,
) -> Result<(), JsValue> {
    if targets.is_empty() {
        return Ok(());
    }
    let mut slots: Vec<(HtmlElement, OneShot)> = targets
        .iter()
        .cloned()
        .map(|el| (el, OneShot::default()))
        .collect();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(slot) = slots.iter_mut().find(|(el, _)| {
                    let el: &Element = el;
                    *el == target
                }) else {
                    continue;
                };
                if slot.1.fire() {
                    observer.unobserve(&target);
                    on_visible(index, slot.0.clone());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for el in &targets {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

/// Convert a millisecond duration to the whole-millisecond delay timers take.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_ms(ms: f64) -> u32 {
    ms.max(0.0).ceil().min(f64::from(u32::MAX)) as u32
}
