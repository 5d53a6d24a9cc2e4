//! Rate limiting for high-frequency browser events.
//!
//! DESIGN
//! ======
//! [`Throttle`] and [`Debounce`] are plain state machines driven by
//! caller-supplied millisecond timestamps. They never touch a timer
//! themselves, which keeps cancellation and flushing testable on the host.
//! The `hydrate` adapters at the bottom of this module feed them
//! `js_sys::Date::now()` and `gloo-timers` callbacks.
//!
//! Throttling is leading-edge only: the first event in a window runs, the rest
//! of the window is dropped, and no trailing call is made. Debouncing is
//! trailing-edge: each new event replaces the pending one and restarts the
//! wait.

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

pub const DEFAULT_DEBOUNCE_MS: f64 = 20.0;
pub const DEFAULT_THROTTLE_MS: f64 = 100.0;

/// Leading-edge throttle gate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throttle {
    limit_ms: f64,
    open_until: Option<f64>,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_MS)
    }
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms: limit_ms.max(0.0), open_until: None }
    }

    #[must_use]
    pub fn limit_ms(&self) -> f64 {
        self.limit_ms
    }

    /// Returns `true` if the caller may run now, opening a new window.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        if let Some(until) = self.open_until
            && now_ms < until
        {
            return false;
        }
        self.open_until = Some(now_ms + self.limit_ms);
        true
    }

    /// Whether events arriving at `now_ms` would be dropped.
    #[must_use]
    pub fn is_suppressing(&self, now_ms: f64) -> bool {
        self.open_until.is_some_and(|until| now_ms < until)
    }

    /// Close the current window so the next event runs immediately.
    pub fn cancel(&mut self) {
        self.open_until = None;
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Pending<T> {
    due_ms: f64,
    value: T,
}

/// Trailing-edge debouncer holding at most one pending value.
#[derive(Clone, Debug, PartialEq)]
pub struct Debounce<T> {
    wait_ms: f64,
    pending: Option<Pending<T>>,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl<T> Debounce<T> {
    #[must_use]
    pub fn new(wait_ms: f64) -> Self {
        Self { wait_ms: wait_ms.max(0.0), pending: None }
    }

    #[must_use]
    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }

    /// Queue `value`, restarting the wait. Returns the displaced value, if any.
    pub fn schedule(&mut self, now_ms: f64, value: T) -> Option<T> {
        let due_ms = now_ms + self.wait_ms;
        self.pending
            .replace(Pending { due_ms, value })
            .map(|prior| prior.value)
    }

    /// Take the pending value once its deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now_ms >= p.due_ms);
        if due { self.pending.take().map(|p| p.value) } else { None }
    }

    /// Time left until the pending value is due, or `None` if idle.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.pending
            .as_ref()
            .map(|pending| (pending.due_ms - now_ms).max(0.0))
    }

    /// Take the pending value immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Wrap an event handler so it runs at most once per `limit_ms`.
#[cfg(feature = "hydrate")]
pub fn throttled<E: 'static>(limit_ms: u32, mut handler: impl FnMut(E) + 'static) -> impl FnMut(E) + 'static {
    let mut gate = Throttle::new(f64::from(limit_ms));
    move |event| {
        if gate.try_acquire(js_sys::Date::now()) {
            handler(event);
        }
    }
}

#[cfg(feature = "hydrate")]
struct DebounceInner {
    state: RefCell<Debounce<()>>,
    timer_armed: Cell<bool>,
    callback: Box<dyn Fn()>,
}

/// Browser-side debounced callback backed by a single `gloo-timers` chain.
///
/// At most one timeout is outstanding. When it fires early relative to the
/// current deadline (because `call` pushed the deadline out), it re-arms for
/// the remainder instead of running the callback.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct DebouncedCallback {
    inner: Rc<DebounceInner>,
}

#[cfg(feature = "hydrate")]
impl DebouncedCallback {
    pub fn new(wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(DebounceInner {
                state: RefCell::new(Debounce::new(f64::from(wait_ms))),
                timer_armed: Cell::new(false),
                callback: Box::new(callback),
            }),
        }
    }

    /// Record an invocation; the callback runs once the wait elapses quietly.
    pub fn call(&self) {
        let wait_ms = {
            let mut state = self.inner.state.borrow_mut();
            state.schedule(js_sys::Date::now(), ());
            state.wait_ms()
        };
        if !self.inner.timer_armed.get() {
            arm(&self.inner, wait_ms);
        }
    }

    /// Drop the pending invocation without running it.
    pub fn cancel(&self) {
        self.inner.state.borrow_mut().cancel();
    }

    /// Run the pending invocation now, if there is one.
    pub fn flush(&self) {
        let due = self.inner.state.borrow_mut().flush().is_some();
        if due {
            (self.inner.callback)();
        }
    }
}

#[cfg(feature = "hydrate")]
fn arm(inner: &Rc<DebounceInner>, delay_ms: f64) {
    inner.timer_armed.set(true);
    let inner_for_cb = Rc::clone(inner);
    Timeout::new(crate::util::dom::whole_ms(delay_ms), move || fire(&inner_for_cb)).forget();
}

#[cfg(feature = "hydrate")]
fn fire(inner: &Rc<DebounceInner>) {
    let now = js_sys::Date::now();
    let (due, remaining) = {
        let mut state = inner.state.borrow_mut();
        let due = state.poll(now).is_some();
        (due, state.remaining_ms(now))
    };
    if due {
        inner.timer_armed.set(false);
        (inner.callback)();
    } else if let Some(remaining) = remaining {
        arm(inner, remaining);
    } else {
        inner.timer_armed.set(false);
    }
}
