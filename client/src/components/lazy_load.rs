//! Deferred background images for `.image-placeholder[data-src]`.

use web_sys::{Document, HtmlElement};

use crate::state::lazy_image::{DATA_SRC_ATTR, DeferredImage, LAZY_IMAGE_SELECTOR, load_deferred};
use crate::util::dom::{self, ObserveOptions};

pub struct LazyLoad;

struct Placeholder(HtmlElement);

impl DeferredImage for Placeholder {
    fn source(&self) -> Option<String> {
        self.0.get_attribute(DATA_SRC_ATTR)
    }

    fn set_background(&mut self, css: &str) {
        dom::set_style(&self.0, "background-image", css);
    }

    fn clear_source(&mut self) {
        if let Err(err) = self.0.remove_attribute(DATA_SRC_ATTR) {
            log::trace!("lazy load: could not clear {DATA_SRC_ATTR}: {err:?}");
        }
    }
}

impl LazyLoad {
    pub fn attach(doc: &Document) -> Option<Self> {
        let targets = dom::find_all(doc, LAZY_IMAGE_SELECTOR);
        if targets.is_empty() {
            return None;
        }
        if !dom::supports_intersection_observer() {
            log::debug!("lazy load: IntersectionObserver unavailable; skipped");
            return None;
        }

        let pending = targets.len();
        let options = ObserveOptions { threshold: 0.0, root_margin: None };
        let result = dom::observe_once(targets, options, |_, el| {
            if !load_deferred(&mut Placeholder(el)) {
                log::trace!("lazy load: empty source left in place");
            }
        });
        if let Err(err) = result {
            log::warn!("lazy load: observer failed: {err:?}");
            return None;
        }

        log::debug!("lazy load: {pending} images deferred");
        Some(Self)
    }
}
