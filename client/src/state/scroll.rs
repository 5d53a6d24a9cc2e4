//! Scroll-position projections for the back-to-top control and hero parallax.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const BACK_TO_TOP_VISIBLE_CLASS: &str = "visible";
pub const PARALLAX_SPEED: f64 = 0.5;

/// The back-to-top control shows once the page has scrolled past `threshold_px`.
#[must_use]
pub fn back_to_top_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Hero transform and opacity for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub translate_y: f64,
    pub opacity: f64,
}

impl ParallaxFrame {
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }

    #[must_use]
    pub fn opacity_css(&self) -> String {
        self.opacity.to_string()
    }
}

/// Parallax frame while the hero is within the first viewport, `None` beyond
/// it. Callers skip the update on `None`, freezing the last applied frame.
#[must_use]
pub fn parallax_frame(scroll_y: f64, viewport_height: f64) -> Option<ParallaxFrame> {
    if scroll_y >= viewport_height {
        return None;
    }
    Some(ParallaxFrame {
        translate_y: scroll_y * PARALLAX_SPEED,
        opacity: 1.0 - scroll_y / viewport_height,
    })
}
