//! Count-up animation for headline statistics.
//!
//! A stat such as `"$1,250+"` is parsed into a numeric target plus the
//! decorations around it. The animation then renders a fixed number of frames
//! counting from zero, abbreviating with `K`/`M`/`B` by the target's
//! magnitude, and finally restores the original text verbatim. Restoring
//! rather than rendering the last frame keeps thousands separators and
//! precision that the abbreviated frames drop.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

pub const STAT_SELECTOR: &str = ".stat-item h3, .stat-box h3";
pub const STAT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_STEPS: u32 = 60;
pub const DEFAULT_DURATION_MS: u32 = 2000;

/// Decorations and numeric target extracted from a stat's text.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterFormat {
    pub target: f64,
    pub dollar: bool,
    pub plus: bool,
    pub percent: bool,
    /// A `/` in the text (as in `24/7`) renders frames as `<digits>/7`.
    pub slash: bool,
}

impl CounterFormat {
    /// Parse stat text. Returns `None` when no number can be extracted.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let numeric: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let target = parse_float_prefix(&numeric)?;
        Some(Self {
            target,
            dollar: text.contains('$'),
            plus: text.contains('+'),
            percent: text.contains('%'),
            slash: text.contains('/'),
        })
    }

    /// Render the display text for an intermediate value.
    #[must_use]
    pub fn render(&self, current: f64) -> String {
        let value = if self.target >= 1_000_000_000.0 {
            format!("{:.1}B", current / 1_000_000_000.0)
        } else if self.target >= 1_000_000.0 {
            format!("{:.1}M", current / 1_000_000.0)
        } else if self.target >= 1_000.0 {
            format!("{:.1}K", current / 1_000.0)
        } else {
            format!("{}", current.floor())
        };

        let mut text = if self.dollar { format!("${value}") } else { value };
        if self.plus {
            text.push('+');
        }
        if self.percent {
            text.push('%');
        }
        if self.slash {
            text.retain(|c| c.is_ascii_digit());
            text.push_str("/7");
        }
        text
    }
}

/// Longest leading decimal number in a string of digits and dots
/// (`"1.2.3"` parses as `1.2`). `None` if the prefix holds no digit.
fn parse_float_prefix(numeric: &str) -> Option<f64> {
    let mut seen_dot = false;
    let end = numeric
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' {
                if seen_dot {
                    return true;
                }
                seen_dot = true;
            }
            false
        })
        .map_or(numeric.len(), |(i, _)| i);
    let prefix = &numeric[..end];
    if !prefix.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let prefix = prefix.trim_end_matches('.');
    if let Some(fraction) = prefix.strip_prefix('.') {
        return format!("0.{fraction}").parse().ok();
    }
    prefix.parse().ok()
}

/// One rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Frame-by-frame count-up for one stat element.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    format: CounterFormat,
    original: String,
    steps: u32,
    step: u32,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    /// Start an animation for `text`, or `None` if it is not numeric.
    #[must_use]
    pub fn new(text: &str, steps: u32) -> Option<Self> {
        let format = CounterFormat::parse(text)?;
        let steps = steps.max(1);
        let increment = format.target / f64::from(steps);
        Some(Self { format, original: text.to_owned(), steps, step: 0, increment, current: 0.0 })
    }

    /// Milliseconds between frames for a total `duration_ms`.
    #[must_use]
    pub fn frame_interval_ms(duration_ms: u32, steps: u32) -> u32 {
        duration_ms / steps.max(1)
    }

    #[must_use]
    pub fn format(&self) -> &CounterFormat {
        &self.format
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }

    /// Advance one frame. The final frame (and any call after it) yields the
    /// original text with `done` set.
    pub fn tick(&mut self) -> CounterFrame {
        if self.is_done() {
            return CounterFrame { text: self.original.clone(), done: true };
        }
        self.current += self.increment;
        self.step += 1;
        if self.is_done() {
            return CounterFrame { text: self.original.clone(), done: true };
        }
        CounterFrame { text: self.format.render(self.current), done: false }
    }
}
