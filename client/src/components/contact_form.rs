//! `#contactForm` binding: field listeners, inline errors, and the
//! submission banner.
//!
//! DESIGN
//! ======
//! [`DomFormSurface`] is the DOM side of [`FormSurface`]; the flow itself is
//! [`ContactFormCore`]. Submissions run on `spawn_local`, and the core's phase
//! guard rejects a second submit while one is in flight.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::config::SiteConfig;
use crate::net::contact::SimulatedTransport;
use crate::state::contact_form::{
    BANNER_EXIT_ANIMATION, BANNER_EXIT_MS, BANNER_KEYFRAMES, BANNER_STYLE, Banner, ContactFormCore, ERROR_CLASS,
    ERROR_COLOR, ERROR_MESSAGE_CLASS, FormSurface, SubmitOutcome, SubmitRejected,
};
use crate::state::validation::{FieldKind, FieldSnapshot, ValidationError};
use crate::util::dom;

const FIELD_SELECTOR: &str = "input, textarea, select";
const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
const KEYFRAMES_STYLE_ID: &str = "contact-banner-keyframes";

const ERROR_MESSAGE_STYLE: [(&str, &str); 4] = [
    ("color", ERROR_COLOR),
    ("font-size", "0.875rem"),
    ("margin-top", "0.25rem"),
    ("display", "block"),
];

/// The rendered `#contactForm` and its controls.
pub struct DomFormSurface {
    doc: Document,
    form: HtmlFormElement,
    fields: Vec<HtmlElement>,
    submit_button: Option<HtmlButtonElement>,
    banner_ms: u32,
}

impl DomFormSurface {
    fn new(doc: &Document, form: HtmlFormElement, banner_ms: u32) -> Self {
        let fields = dom::find_all_in(&form, FIELD_SELECTOR);
        let submit_button = form
            .query_selector(SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        Self { doc: doc.clone(), form, fields, submit_button, banner_ms }
    }

    fn show_banner(&self, banner: Banner) {
        ensure_banner_keyframes(&self.doc);
        let Some(body) = self.doc.body() else {
            return;
        };
        let Some(el) = self
            .doc
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        el.set_class_name(banner.class_name);
        el.set_inner_html(banner.html);
        dom::set_styles(&el, &BANNER_STYLE);
        dom::set_style(&el, "background", banner.background);
        if body.append_child(&el).is_err() {
            return;
        }

        Timeout::new(self.banner_ms, move || {
            dom::set_style(&el, "animation", BANNER_EXIT_ANIMATION);
            Timeout::new(BANNER_EXIT_MS, move || el.remove()).forget();
        })
        .forget();
    }
}

fn field_value(el: &HtmlElement) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Inject the banner slide keyframes into `<head>` once per page.
fn ensure_banner_keyframes(doc: &Document) {
    if doc.get_element_by_id(KEYFRAMES_STYLE_ID).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else {
        return;
    };
    style.set_id(KEYFRAMES_STYLE_ID);
    style.set_text_content(Some(BANNER_KEYFRAMES));
    if let Err(err) = head.append_child(&style) {
        log::warn!("contact form: could not inject banner keyframes: {err:?}");
    }
}

impl FormSurface for DomFormSurface {
    fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn field(&self, index: usize) -> Option<FieldSnapshot> {
        let el = self.fields.get(index)?;
        let name = el
            .get_attribute("name")
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| el.id());
        Some(FieldSnapshot {
            name,
            kind: FieldKind::from_dom(&el.tag_name(), &el.get_attribute("type").unwrap_or_default()),
            required: el.has_attribute("required"),
            value: field_value(el),
        })
    }

    fn render_field(&self, index: usize, result: Result<(), ValidationError>) {
        let Some(field) = self.fields.get(index) else {
            return;
        };
        let parent = field.parent_element();
        dom::set_class(field, ERROR_CLASS, false);
        dom::set_style(field, "border-color", "");
        if let Some(parent) = &parent {
            for stale in dom::find_all_in(parent, &format!(".{ERROR_MESSAGE_CLASS}")) {
                stale.remove();
            }
        }

        let Err(error) = result else {
            return;
        };
        dom::set_class(field, ERROR_CLASS, true);
        dom::set_style(field, "border-color", ERROR_COLOR);
        let Some(parent) = parent else {
            return;
        };
        let Some(message) = self
            .doc
            .create_element("span")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        message.set_class_name(ERROR_MESSAGE_CLASS);
        message.set_text_content(Some(&error.to_string()));
        dom::set_styles(&message, &ERROR_MESSAGE_STYLE);
        if let Err(err) = parent.append_child(&message) {
            log::warn!("contact form: could not attach error message: {err:?}");
        }
    }

    fn submit_label(&self) -> Option<String> {
        self.submit_button
            .as_ref()
            .map(|button| button.text_content().unwrap_or_default())
    }

    fn set_submit_state(&self, label: &str, disabled: bool) {
        if let Some(button) = &self.submit_button {
            button.set_text_content(Some(label));
            button.set_disabled(disabled);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn announce(&self, outcome: &SubmitOutcome) {
        if let SubmitOutcome::Failed(err) = outcome {
            log::error!("contact form: {err}");
        }
        self.show_banner(outcome.banner());
    }
}

pub struct ContactForm;

impl ContactForm {
    pub fn attach(doc: &Document, config: &SiteConfig) -> Option<Self> {
        let Some(form) = doc
            .get_element_by_id("contactForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            log::debug!("contact form: no #contactForm; skipped");
            return None;
        };

        let surface = DomFormSurface::new(doc, form.clone(), config.success_banner_ms);
        let fields = surface.fields.clone();
        let transport = SimulatedTransport { latency_ms: config.submit_latency_ms };
        let core = Rc::new(ContactFormCore::new(surface, transport));

        for (index, field) in fields.iter().enumerate() {
            let on_blur = Rc::clone(&core);
            dom::listen(field, "blur", move |_: Event| {
                if let Err(err) = on_blur.on_blur(index) {
                    log::trace!("contact form: field {index}: {err}");
                }
            });

            let on_input = Rc::clone(&core);
            let el = field.clone();
            dom::listen(field, "input", move |_: Event| {
                if let Some(Err(err)) = on_input.on_input(index, el.class_list().contains(ERROR_CLASS)) {
                    log::trace!("contact form: field {index}: {err}");
                }
            });
        }

        let on_submit = Rc::clone(&core);
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            let core = Rc::clone(&on_submit);
            wasm_bindgen_futures::spawn_local(async move {
                match core.submit().await {
                    Ok(SubmitOutcome::Sent) => log::info!("contact form: message sent"),
                    Ok(SubmitOutcome::Failed(_)) => {}
                    Err(SubmitRejected::InFlight) => log::debug!("contact form: submit ignored while sending"),
                    Err(rejected @ SubmitRejected::Invalid { .. }) => log::debug!("contact form: {rejected}"),
                }
            });
        });

        log::debug!("contact form: {} fields bound", fields.len());
        Some(Self)
    }
}
