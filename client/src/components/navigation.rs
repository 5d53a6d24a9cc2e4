//! Header navigation: mobile menu, anchor scrolling, header shadow, and
//! active-link tracking.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent, Node};

use crate::config::SiteConfig;
use crate::state::navigation::{
    MenuState, SectionBounds, active_section, anchor_target, header_shadow, link_targets, scroll_offset,
};
use crate::util::dom;
use crate::util::rate_limit::throttled;

const ACTIVE_CLASS: &str = "active";

struct Inner {
    doc: Document,
    header: Option<HtmlElement>,
    navbar: Option<HtmlElement>,
    hamburger: Option<HtmlElement>,
    menu: Option<HtmlElement>,
    links: Vec<HtmlElement>,
    sections: Vec<HtmlElement>,
    menu_state: Cell<MenuState>,
}

#[derive(Clone)]
pub struct Navigation {
    inner: Rc<Inner>,
}

impl Navigation {
    pub fn attach(doc: &Document, config: &SiteConfig) -> Option<Self> {
        let header = dom::find(doc, ".main-header");
        let links = dom::find_all(doc, ".nav-menu a");
        if header.is_none() && links.is_empty() {
            log::debug!("navigation: no header or nav links; skipped");
            return None;
        }

        let nav = Self {
            inner: Rc::new(Inner {
                doc: doc.clone(),
                header,
                navbar: dom::find(doc, ".navbar"),
                hamburger: dom::find(doc, ".hamburger"),
                menu: dom::find(doc, ".nav-menu"),
                links,
                sections: dom::find_all(doc, "section[id]"),
                menu_state: Cell::new(MenuState::default()),
            }),
        };
        nav.bind_menu();
        nav.bind_links();
        nav.bind_scroll(config.nav_scroll_throttle_ms);
        Some(nav)
    }

    fn bind_menu(&self) {
        let Some(hamburger) = &self.inner.hamburger else {
            log::debug!("navigation: no .hamburger; mobile menu disabled");
            return;
        };

        let nav = self.clone();
        dom::listen(hamburger, "click", move |_: MouseEvent| {
            let mut state = nav.inner.menu_state.get();
            state.toggle();
            nav.set_menu(state);
        });

        let nav = self.clone();
        dom::listen(&self.inner.doc, "click", move |event: MouseEvent| {
            let inside = nav.inner.navbar.as_ref().is_some_and(|navbar| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                navbar.contains(target.as_ref())
            });
            if nav.inner.menu_state.get().closes_on_click(inside) {
                nav.close_menu();
            }
        });
    }

    fn bind_links(&self) {
        for link in &self.inner.links {
            let nav = self.clone();
            let href = link.get_attribute("href");
            dom::listen(link, "click", move |event: MouseEvent| {
                nav.close_menu();
                let Some(id) = href.as_deref().and_then(anchor_target) else {
                    return;
                };
                event.prevent_default();
                nav.scroll_to_section(id);
            });
        }
    }

    fn bind_scroll(&self, throttle_ms: u32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let nav = self.clone();
        dom::listen(
            &window,
            "scroll",
            throttled(throttle_ms, move |_: Event| nav.on_scroll()),
        );
    }

    fn set_menu(&self, state: MenuState) {
        self.inner.menu_state.set(state);
        for el in [&self.inner.hamburger, &self.inner.menu].into_iter().flatten() {
            dom::set_class(el, ACTIVE_CLASS, state.is_open());
        }
        if let Some(body) = self.inner.doc.body() {
            dom::set_style(&body, "overflow", state.body_overflow());
        }
    }

    fn close_menu(&self) {
        let mut state = self.inner.menu_state.get();
        if state.close() {
            self.set_menu(state);
        }
    }

    fn scroll_to_section(&self, id: &str) {
        let Some(target) = self
            .inner
            .doc
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::debug!("navigation: no section #{id}");
            return;
        };
        let top = scroll_offset(f64::from(target.offset_top()), dom::header_height(self.inner.header.as_ref()));
        dom::smooth_scroll_to(top);
    }

    fn on_scroll(&self) {
        let y = dom::scroll_y();
        if let Some(header) = &self.inner.header {
            dom::set_style(header, "box-shadow", header_shadow(y));
        }

        let bounds: Vec<SectionBounds> = self
            .inner
            .sections
            .iter()
            .map(|section| SectionBounds {
                id: section.id(),
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
            .collect();
        let Some(current) = active_section(y, &bounds) else {
            return;
        };
        for link in &self.inner.links {
            let active = link_targets(link.get_attribute("href").as_deref(), current);
            dom::set_class(link, ACTIVE_CLASS, active);
        }
    }
}
