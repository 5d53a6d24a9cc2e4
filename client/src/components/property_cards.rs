//! Property listing cards: hover transition and the "contact about this
//! property" shortcut.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use crate::state::navigation::scroll_offset;
use crate::util::dom;

const CARD_SELECTOR: &str = ".property-card";
const CARD_TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

pub struct PropertyCards;

impl PropertyCards {
    pub fn attach(doc: &Document) -> Option<Self> {
        let cards = dom::find_all(doc, CARD_SELECTOR);
        if cards.is_empty() {
            log::debug!("property cards: none on page; skipped");
            return None;
        }
        let header = dom::find(doc, ".main-header");
        let contact = doc
            .get_element_by_id("contact")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        for card in &cards {
            let hovered = card.clone();
            dom::listen(card, "mouseenter", move |_: MouseEvent| {
                dom::set_style(&hovered, "transition", CARD_TRANSITION);
            });

            let Some(button) = dom::find_in(card, ".btn-secondary") else {
                continue;
            };
            let title = dom::find_in(card, ".property-title");
            let header = header.clone();
            let contact = contact.clone();
            dom::listen(&button, "click", move |event: Event| {
                event.prevent_default();
                if let Some(title) = &title {
                    log::info!("User clicked: {}", title.text_content().unwrap_or_default());
                }
                if let Some(contact) = &contact {
                    let top = scroll_offset(f64::from(contact.offset_top()), dom::header_height(header.as_ref()));
                    dom::smooth_scroll_to(top);
                }
            });
        }

        log::debug!("property cards: {} bound", cards.len());
        Some(Self)
    }
}
