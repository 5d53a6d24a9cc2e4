//! One-shot visibility transitions and the reveal-on-scroll presets.
//!
//! Every visibility-driven feature (card reveal, stat counters, lazy images)
//! fires at most once per element. [`OneShot`] is that `Pending -> Fired`
//! transition; nothing ever moves an element back to `Pending`.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Elements that fade up into view.
pub const REVEAL_SELECTOR: &str =
    ".property-card, .service-card, .testimonial-card, .stat-box, .feature-item, .info-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OneShot {
    #[default]
    Pending,
    Fired,
}

impl OneShot {
    /// Transition to `Fired`. Returns `true` only on the first call.
    pub fn fire(&mut self) -> bool {
        match self {
            Self::Pending => {
                *self = Self::Fired;
                true
            }
            Self::Fired => false,
        }
    }

    #[must_use]
    pub fn has_fired(self) -> bool {
        self == Self::Fired
    }
}

/// Reveal delay for the entry at `batch_index` in an observer batch.
#[must_use]
pub fn reveal_delay_ms(batch_index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(batch_index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}
