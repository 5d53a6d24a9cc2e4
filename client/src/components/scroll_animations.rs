//! Fade-up reveal for cards and feature blocks as they scroll into view.

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::config::SiteConfig;
use crate::state::reveal::{
    HIDDEN_STYLE, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEALED_STYLE, reveal_delay_ms,
};
use crate::util::dom::{self, ObserveOptions};

pub struct ScrollAnimations;

impl ScrollAnimations {
    pub fn attach(doc: &Document, config: &SiteConfig) -> Option<Self> {
        let targets = dom::find_all(doc, REVEAL_SELECTOR);
        if targets.is_empty() {
            log::debug!("scroll animations: no reveal targets; skipped");
            return None;
        }
        // Without an observer the content would stay hidden, so leave it as authored.
        if !dom::supports_intersection_observer() {
            log::debug!("scroll animations: IntersectionObserver unavailable; skipped");
            return None;
        }

        for el in &targets {
            dom::set_styles(el, &HIDDEN_STYLE);
        }

        let observed = targets.len();
        let stagger_ms = config.reveal_stagger_ms;
        let options = ObserveOptions { threshold: REVEAL_THRESHOLD, root_margin: Some(REVEAL_ROOT_MARGIN) };
        let result = dom::observe_once(targets.clone(), options, move |batch_index, el| {
            let delay = reveal_delay_ms(batch_index, stagger_ms);
            Timeout::new(delay, move || dom::set_styles(&el, &REVEALED_STYLE)).forget();
        });
        if let Err(err) = result {
            log::warn!("scroll animations: observer failed: {err:?}");
            for el in &targets {
                dom::set_styles(el, &REVEALED_STYLE);
            }
            return None;
        }

        log::debug!("scroll animations: observing {observed} targets");
        Some(Self)
    }
}
