//! Page load timing.

#[cfg(test)]
#[path = "perf_test.rs"]
mod perf_test;

/// Milliseconds from navigation start to the end of the load event.
///
/// `None` while `loadEventEnd` is still unpopulated (zero), which is the case
/// inside the `load` handler itself, and for a zero-length measurement.
#[must_use]
pub fn page_load_ms(navigation_start: f64, load_event_end: f64) -> Option<f64> {
    if navigation_start <= 0.0 || load_event_end <= navigation_start {
        return None;
    }
    Some(load_event_end - navigation_start)
}

#[must_use]
pub fn load_time_message(load_ms: f64) -> String {
    format!("Page Load Time: {load_ms:.0}ms")
}
