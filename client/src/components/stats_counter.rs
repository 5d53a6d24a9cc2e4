//! Count-up animation for headline statistics, started the first time each
//! stat becomes half visible.

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::config::SiteConfig;
use crate::state::counter::{CounterAnimation, STAT_SELECTOR, STAT_THRESHOLD};
use crate::util::dom::{self, ObserveOptions};

pub struct StatsCounter;

impl StatsCounter {
    pub fn attach(doc: &Document, config: &SiteConfig) -> Option<Self> {
        let targets = dom::find_all(doc, STAT_SELECTOR);
        if targets.is_empty() {
            log::debug!("stats counter: no stats; skipped");
            return None;
        }
        if !dom::supports_intersection_observer() {
            log::debug!("stats counter: IntersectionObserver unavailable; skipped");
            return None;
        }

        let stats = targets.len();
        let steps = config.counter_steps;
        let interval_ms = CounterAnimation::frame_interval_ms(config.counter_duration_ms, steps);
        let options = ObserveOptions { threshold: STAT_THRESHOLD, root_margin: None };
        let result = dom::observe_once(targets, options, move |_, el| {
            let text = el.text_content().unwrap_or_default();
            match CounterAnimation::new(&text, steps) {
                Some(animation) => run_frames(el, animation, interval_ms),
                None => log::debug!("stats counter: {text:?} is not numeric"),
            }
        });
        if let Err(err) = result {
            log::warn!("stats counter: observer failed: {err:?}");
            return None;
        }

        log::debug!("stats counter: {stats} stats armed");
        Some(Self)
    }
}

/// One timeout per frame; each frame schedules the next until the animation
/// restores the original text.
fn run_frames(el: HtmlElement, mut animation: CounterAnimation, interval_ms: u32) {
    Timeout::new(interval_ms, move || {
        let frame = animation.tick();
        el.set_text_content(Some(&frame.text));
        if !frame.done {
            run_frames(el, animation, interval_ms);
        }
    })
    .forget();
}
