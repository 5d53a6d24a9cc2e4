use super::*;
use crate::state::validation::FieldKind;
use futures::executor::block_on;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Render(usize, Result<(), ValidationError>),
    Button(String, bool),
    Transport(ContactSubmission),
    Announce(SubmitOutcome),
    Reset,
}

type Log = Rc<RefCell<Vec<Event>>>;

struct FakeForm {
    fields: RefCell<Vec<FieldSnapshot>>,
    errors: RefCell<Vec<Option<ValidationError>>>,
    label: RefCell<Option<String>>,
    disabled: Cell<bool>,
    log: Log,
}

impl FakeForm {
    fn new(fields: Vec<FieldSnapshot>, label: Option<&str>, log: &Log) -> Self {
        let count = fields.len();
        Self {
            fields: RefCell::new(fields),
            errors: RefCell::new(vec![None; count]),
            label: RefCell::new(label.map(str::to_owned)),
            disabled: Cell::new(false),
            log: Rc::clone(log),
        }
    }

    fn set_value(&self, index: usize, value: &str) {
        self.fields.borrow_mut()[index].value = value.to_owned();
    }

    fn error_count(&self) -> usize {
        self.errors.borrow().iter().filter(|e| e.is_some()).count()
    }
}

impl FormSurface for FakeForm {
    fn field_count(&self) -> usize {
        self.fields.borrow().len()
    }

    fn field(&self, index: usize) -> Option<FieldSnapshot> {
        self.fields.borrow().get(index).cloned()
    }

    fn render_field(&self, index: usize, result: Result<(), ValidationError>) {
        self.errors.borrow_mut()[index] = result.err();
        self.log.borrow_mut().push(Event::Render(index, result));
    }

    fn submit_label(&self) -> Option<String> {
        self.label.borrow().clone()
    }

    fn set_submit_state(&self, label: &str, disabled: bool) {
        *self.label.borrow_mut() = Some(label.to_owned());
        self.disabled.set(disabled);
        self.log.borrow_mut().push(Event::Button(label.to_owned(), disabled));
    }

    fn reset(&self) {
        for field in self.fields.borrow_mut().iter_mut() {
            field.value.clear();
        }
        self.log.borrow_mut().push(Event::Reset);
    }

    fn announce(&self, outcome: &SubmitOutcome) {
        self.log.borrow_mut().push(Event::Announce(outcome.clone()));
    }
}

struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

struct FakeTransport {
    result: Result<(), SubmitError>,
    log: Log,
}

#[async_trait::async_trait(?Send)]
impl ContactTransport for FakeTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        self.log.borrow_mut().push(Event::Transport(submission.clone()));
        YieldOnce(false).await;
        self.result.clone()
    }
}

fn snapshot(name: &str, kind: FieldKind, required: bool, value: &str) -> FieldSnapshot {
    FieldSnapshot { name: name.to_owned(), kind, required, value: value.to_owned() }
}

fn contact_fields() -> Vec<FieldSnapshot> {
    vec![
        snapshot("name", FieldKind::Text, true, "Jane Doe"),
        snapshot("email", FieldKind::Email, true, "jane@example.com"),
        snapshot("phone", FieldKind::Tel, false, ""),
        snapshot("message", FieldKind::TextArea, true, "Looking for a condo."),
    ]
}

fn core_with(
    fields: Vec<FieldSnapshot>,
    result: Result<(), SubmitError>,
) -> (ContactFormCore<FakeForm, FakeTransport>, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let form = FakeForm::new(fields, Some("Send Message"), &log);
    let transport = FakeTransport { result, log: Rc::clone(&log) };
    (ContactFormCore::new(form, transport), log)
}

// =============================================================
// Submission flow
// =============================================================

#[test]
fn valid_submit_locks_button_sends_announces_resets_and_restores() {
    let (core, log) = core_with(contact_fields(), Ok(()));

    let outcome = block_on(core.submit());
    assert_eq!(outcome, Ok(SubmitOutcome::Sent));

    let events = log.borrow().clone();
    let submission = ContactSubmission::from_fields(&contact_fields());
    assert_eq!(
        events,
        vec![
            Event::Render(0, Ok(())),
            Event::Render(1, Ok(())),
            Event::Render(3, Ok(())),
            Event::Button(SENDING_LABEL.to_owned(), true),
            Event::Transport(submission),
            Event::Announce(SubmitOutcome::Sent),
            Event::Reset,
            Event::Button("Send Message".to_owned(), false),
        ]
    );

    let form = core.surface();
    assert!(!form.disabled.get());
    assert_eq!(form.submit_label().as_deref(), Some("Send Message"));
    assert!(form.fields.borrow().iter().all(|f| f.value.is_empty()));
    assert_eq!(core.phase(), SubmitPhase::Idle);
}

#[test]
fn invalid_required_field_aborts_before_transport() {
    let mut fields = contact_fields();
    fields[1].value = "not-an-email".to_owned();
    fields[0].value = "   ".to_owned();
    let (core, log) = core_with(fields, Ok(()));

    assert_eq!(block_on(core.submit()), Err(SubmitRejected::Invalid { count: 2 }));
    let events = log.borrow().clone();
    assert!(events.iter().all(|e| matches!(e, Event::Render(..))));
    assert_eq!(core.surface().error_count(), 2);
    assert_eq!(core.surface().errors.borrow()[0], Some(ValidationError::Required));
    assert_eq!(core.surface().errors.borrow()[1], Some(ValidationError::InvalidEmail));
    assert!(!core.surface().disabled.get());
}

#[test]
fn transport_failure_keeps_values_and_restores_button() {
    let failure = SubmitError::Transport("offline".to_owned());
    let (core, log) = core_with(contact_fields(), Err(failure.clone()));

    assert_eq!(block_on(core.submit()), Ok(SubmitOutcome::Failed(failure.clone())));
    let events = log.borrow().clone();
    assert!(events.contains(&Event::Announce(SubmitOutcome::Failed(failure))));
    assert!(!events.contains(&Event::Reset));
    assert_eq!(events.last(), Some(&Event::Button("Send Message".to_owned(), false)));
    assert_eq!(core.surface().field(0).unwrap().value, "Jane Doe");
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let (core, log) = core_with(contact_fields(), Ok(()));

    let (first, second) = block_on(async { futures::join!(core.submit(), core.submit()) });
    assert_eq!(first, Ok(SubmitOutcome::Sent));
    assert_eq!(second, Err(SubmitRejected::InFlight));
    let sends = log.borrow().iter().filter(|e| matches!(e, Event::Transport(_))).count();
    assert_eq!(sends, 1);
}

#[test]
fn form_without_submit_button_still_submits() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let form = FakeForm::new(contact_fields(), None, &log);
    let core = ContactFormCore::new(form, FakeTransport { result: Ok(()), log: Rc::clone(&log) });

    assert_eq!(block_on(core.submit()), Ok(SubmitOutcome::Sent));
    assert!(!log.borrow().iter().any(|e| matches!(e, Event::Button(..))));
}

// =============================================================
// Field events
// =============================================================

#[test]
fn input_on_untouched_field_does_not_validate() {
    let (core, log) = core_with(contact_fields(), Ok(()));
    core.surface().set_value(1, "jane@");
    assert_eq!(core.on_input(1, false), None);
    assert!(log.borrow().is_empty());
}

#[test]
fn blur_flags_field_and_input_clears_it_once_fixed() {
    let (core, _log) = core_with(contact_fields(), Ok(()));
    core.surface().set_value(1, "jane@");
    assert_eq!(core.on_blur(1), Err(ValidationError::InvalidEmail));
    assert_eq!(core.surface().error_count(), 1);

    core.surface().set_value(1, "jane@example.com");
    assert_eq!(core.on_input(1, true), Some(Ok(())));
    assert_eq!(core.surface().error_count(), 0);
}

#[test]
fn revalidating_a_valid_field_leaves_no_error() {
    let (core, _log) = core_with(contact_fields(), Ok(()));
    assert_eq!(core.on_blur(0), Ok(()));
    assert_eq!(core.on_blur(0), Ok(()));
    assert_eq!(core.surface().error_count(), 0);
}

#[test]
fn out_of_range_field_is_ignored() {
    let (core, log) = core_with(contact_fields(), Ok(()));
    assert_eq!(core.validate_field(99), Ok(()));
    assert!(log.borrow().is_empty());
}

// =============================================================
// Banners
// =============================================================

#[test]
fn success_banner_content() {
    let banner = SubmitOutcome::Sent.banner();
    assert_eq!(banner.class_name, "success-message");
    assert_eq!(banner.background, "#28a745");
    assert!(banner.html.contains("Success!"));
}

#[test]
fn failure_banner_uses_error_color() {
    let banner = SubmitOutcome::Failed(SubmitError::Transport("offline".to_owned())).banner();
    assert_eq!(banner.class_name, "failure-message");
    assert_eq!(banner.background, ERROR_COLOR);
}

#[test]
fn rejection_messages() {
    assert_eq!(SubmitRejected::InFlight.to_string(), "a submission is already in flight");
    assert_eq!(SubmitRejected::Invalid { count: 2 }.to_string(), "2 field(s) failed validation");
}

#[test]
fn banner_slides_in_from_400px_with_soft_shadow() {
    assert_eq!(BANNER_KEYFRAMES.matches("translateX(400px)").count(), 2);
    assert!(!BANNER_KEYFRAMES.contains('%'));
    let style: std::collections::HashMap<_, _> = BANNER_STYLE.into_iter().collect();
    assert_eq!(style["box-shadow"], "0 4px 12px rgba(0, 0, 0, 0.15)");
    assert_eq!(style["animation"], "slideInRight 0.3s ease");
    assert!(BANNER_EXIT_ANIMATION.starts_with("slideOutRight 0.3s"));
    assert_eq!(BANNER_EXIT_MS, 300);
}
