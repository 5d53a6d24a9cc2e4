//! Floating scroll-to-top control.

use web_sys::{Document, Event, MouseEvent};

use crate::config::SiteConfig;
use crate::state::scroll::{BACK_TO_TOP_VISIBLE_CLASS, back_to_top_visible};
use crate::util::dom;
use crate::util::rate_limit::throttled;

pub struct BackToTop;

impl BackToTop {
    pub fn attach(doc: &Document, config: &SiteConfig) -> Option<Self> {
        let Some(button) = dom::find(doc, "#backToTop") else {
            log::debug!("back-to-top: no #backToTop; skipped");
            return None;
        };
        let window = web_sys::window()?;

        let threshold = config.back_to_top_threshold_px;
        let scroll_button = button.clone();
        dom::listen(
            &window,
            "scroll",
            throttled(config.back_to_top_throttle_ms, move |_: Event| {
                let visible = back_to_top_visible(dom::scroll_y(), threshold);
                dom::set_class(&scroll_button, BACK_TO_TOP_VISIBLE_CLASS, visible);
            }),
        );
        dom::listen(&button, "click", |_: MouseEvent| dom::smooth_scroll_to(0.0));

        Some(Self)
    }
}
