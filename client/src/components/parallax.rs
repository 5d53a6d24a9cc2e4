//! Hero parallax: the hero drifts and fades while the first viewport scrolls away.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Event};

use crate::config::SiteConfig;
use crate::state::scroll::parallax_frame;
use crate::util::dom;
use crate::util::rate_limit::{DebouncedCallback, throttled};

pub struct Parallax;

impl Parallax {
    pub fn attach(doc: &Document, config: &SiteConfig) -> Option<Self> {
        let Some(hero) = dom::find(doc, ".hero-section") else {
            log::debug!("parallax: no .hero-section; skipped");
            return None;
        };
        let window = web_sys::window()?;
        let viewport_height = Rc::new(Cell::new(dom::viewport_height()));

        let scroll_height = Rc::clone(&viewport_height);
        dom::listen(
            &window,
            "scroll",
            throttled(config.parallax_throttle_ms, move |_: Event| {
                let Some(frame) = parallax_frame(dom::scroll_y(), scroll_height.get()) else {
                    return;
                };
                dom::set_style(&hero, "transform", &frame.transform_css());
                dom::set_style(&hero, "opacity", &frame.opacity_css());
            }),
        );

        let resize_height = Rc::clone(&viewport_height);
        let refresh = DebouncedCallback::new(config.resize_debounce_ms, move || {
            resize_height.set(dom::viewport_height());
        });
        dom::listen(&window, "resize", move |_: Event| refresh.call());

        log::debug!("parallax: scaled to {}px viewport", viewport_height.get());
        Some(Self)
    }
}
