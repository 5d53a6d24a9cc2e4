//! Logs the page load time once the `load` event has finished.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Event, Performance};

use crate::state::perf::{load_time_message, page_load_ms};
use crate::util::dom;

pub struct PerformanceMonitor;

impl PerformanceMonitor {
    pub fn attach(doc: &Document) -> Option<Self> {
        let window = web_sys::window()?;
        let Some(performance) = window.performance() else {
            log::debug!("performance monitor: no Performance API; skipped");
            return None;
        };

        // `loadEventEnd` is only populated after the load handlers return.
        if dom::ready_state(doc).as_deref() == Some("complete") {
            Timeout::new(0, move || report(&performance)).forget();
        } else {
            dom::listen(&window, "load", move |_: Event| {
                let performance = performance.clone();
                Timeout::new(0, move || report(&performance)).forget();
            });
        }
        Some(Self)
    }
}

fn report(performance: &Performance) {
    let timing = performance.timing();
    if let Some(load_ms) = page_load_ms(timing.navigation_start(), timing.load_event_end()) {
        log::info!("{}", load_time_message(load_ms));
    }
}
