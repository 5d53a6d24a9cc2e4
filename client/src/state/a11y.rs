//! Keyboard activation and skip-link presets.

#[cfg(test)]
#[path = "a11y_test.rs"]
mod a11y_test;

pub const CARD_SELECTOR: &str = ".property-card, .service-card";

pub const SKIP_LINK_CLASS: &str = "skip-link";
pub const SKIP_LINK_HREF: &str = "#home";
pub const SKIP_LINK_TEXT: &str = "Skip to main content";
pub const SKIP_LINK_STYLE: [(&str, &str); 8] = [
    ("position", "absolute"),
    ("top", "-40px"),
    ("left", "0"),
    ("background", "var(--color-accent)"),
    ("color", "white"),
    ("padding", "8px"),
    ("text-decoration", "none"),
    ("z-index", "10001"),
];

/// Keys that activate a focused card, matching native button behavior.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Skip link `top` offset: on screen only while focused.
#[must_use]
pub fn skip_link_top(focused: bool) -> &'static str {
    if focused { "0" } else { "-40px" }
}
