//! Keyboard activation for cards and the skip-to-content link.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent};

use crate::state::a11y::{
    CARD_SELECTOR, SKIP_LINK_CLASS, SKIP_LINK_HREF, SKIP_LINK_STYLE, SKIP_LINK_TEXT, is_activation_key, skip_link_top,
};
use crate::util::dom;

pub struct Accessibility;

impl Accessibility {
    pub fn attach(doc: &Document) -> Option<Self> {
        let cards = dom::find_all(doc, CARD_SELECTOR);
        for card in &cards {
            dom::set_attribute(card, "tabindex", "0");
            let target = card.clone();
            dom::listen(card, "keypress", move |event: KeyboardEvent| {
                if !is_activation_key(&event.key()) {
                    return;
                }
                if let Some(link) = dom::find_in(&target, "a") {
                    link.click();
                }
            });
        }

        let skip_link = inject_skip_link(doc);
        if cards.is_empty() && skip_link.is_none() {
            return None;
        }
        log::debug!(
            "accessibility: {} cards focusable, skip link {}",
            cards.len(),
            if skip_link.is_some() { "injected" } else { "unavailable" }
        );
        Some(Self)
    }
}

fn inject_skip_link(doc: &Document) -> Option<HtmlElement> {
    let body = doc.body()?;
    let link = doc
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())?;
    link.set_class_name(SKIP_LINK_CLASS);
    dom::set_attribute(&link, "href", SKIP_LINK_HREF);
    link.set_text_content(Some(SKIP_LINK_TEXT));
    dom::set_styles(&link, &SKIP_LINK_STYLE);
    body.insert_before(&link, body.first_child().as_ref()).ok()?;

    for (event, focused) in [("focus", true), ("blur", false)] {
        let target = link.clone();
        dom::listen(&link, event, move |_: Event| {
            dom::set_style(&target, "top", skip_link_top(focused));
        });
    }
    Some(link)
}
