//! WASM entry point and boot sequence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs as soon as the module is instantiated. It installs the panic
//! hook and console logger, reads the optional `#site-config` block, and
//! defers controller mounting until the document has been parsed.
//!
//! ERROR HANDLING
//! ==============
//! A malformed config block is logged as a warning and the defaults are used.
//! A controller whose root element is missing is skipped, never fatal.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::components::accessibility::Accessibility;
use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactForm;
use crate::components::lazy_load::LazyLoad;
use crate::components::navigation::Navigation;
use crate::components::parallax::Parallax;
use crate::components::performance_monitor::PerformanceMonitor;
use crate::components::property_cards::PropertyCards;
use crate::components::scroll_animations::ScrollAnimations;
use crate::components::stats_counter::StatsCounter;
use crate::config::{CONFIG_ELEMENT_ID, ConfigError, SiteConfig};
use crate::util::dom;

const BODY_FADE_DELAY_MS: u32 = 100;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(doc) = dom::document() else {
        return;
    };

    let (config, config_error) = match read_config(&doc) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
    if let Some(err) = config_error {
        log::warn!("{err}; using defaults");
    }

    let boot_doc = doc.clone();
    dom::on_document_ready(&doc, move || boot(&boot_doc, &config));
}

fn read_config(doc: &Document) -> Result<SiteConfig, ConfigError> {
    let raw = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    SiteConfig::from_json(&raw)
}

/// Mount every controller against the parsed document, then fade the page in.
pub fn boot(doc: &Document, config: &SiteConfig) {
    log::info!("Estate Company Website Initialized");

    let navigation = Navigation::attach(doc, config);
    let reveal = ScrollAnimations::attach(doc, config);
    let back_to_top = BackToTop::attach(doc, config);
    let contact_form = ContactForm::attach(doc, config);
    let property_cards = PropertyCards::attach(doc);
    let stats = StatsCounter::attach(doc, config);
    let parallax = Parallax::attach(doc, config);
    let lazy = LazyLoad::attach(doc);
    let perf = PerformanceMonitor::attach(doc);
    let a11y = Accessibility::attach(doc);

    log::debug!(
        "mounted: navigation={} reveal={} back_to_top={} contact_form={} property_cards={} \
         stats={} parallax={} lazy_load={} perf={} a11y={}",
        navigation.is_some(),
        reveal.is_some(),
        back_to_top.is_some(),
        contact_form.is_some(),
        property_cards.is_some(),
        stats.is_some(),
        parallax.is_some(),
        lazy.is_some(),
        perf.is_some(),
        a11y.is_some(),
    );

    fade_in_body(doc);
    log::info!("All modules loaded successfully");
}

fn fade_in_body(doc: &Document) {
    let Some(body) = doc.body() else {
        return;
    };
    dom::set_style(&body, "opacity", "0");
    Timeout::new(BODY_FADE_DELAY_MS, move || {
        dom::set_styles(&body, &[("transition", "opacity 0.5s ease"), ("opacity", "1")]);
    })
    .forget();
}
