//! Navigation state: mobile menu, header shadow, and active-link selection.
//!
//! DESIGN
//! ======
//! The menu open flag is mirrored onto two elements (hamburger and menu) and
//! onto the body scroll lock. Keeping the flag here, rather than reading it
//! back from either element's class list, means the three mirrors are always
//! written from one value.
//!
//! Active-link selection probes `scrollY + 200` against every section. When
//! sections overlap, the last match in document order wins.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Distance below the viewport top used to decide which section is current.
pub const SECTION_PROBE_OFFSET_PX: f64 = 200.0;
pub const HEADER_SHADOW_THRESHOLD_PX: f64 = 100.0;
pub const HEADER_SHADOW_RESTING: &str = "0 4px 12px rgba(0, 0, 0, 0.12)";
pub const HEADER_SHADOW_SCROLLED: &str = "0 4px 20px rgba(0, 0, 0, 0.15)";

/// Mobile menu open/closed flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Inline `overflow` value for `<body>`: locked while the menu is open.
    #[must_use]
    pub fn body_overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }

    /// A document click closes an open menu unless it landed inside the navbar.
    #[must_use]
    pub fn closes_on_click(self, inside_navbar: bool) -> bool {
        self.open && !inside_navbar
    }
}

#[must_use]
pub fn header_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > HEADER_SHADOW_THRESHOLD_PX {
        HEADER_SHADOW_SCROLLED
    } else {
        HEADER_SHADOW_RESTING
    }
}

/// In-page anchor id for an `href` such as `#contact`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Scroll position that puts a section's top just below the fixed header.
#[must_use]
pub fn scroll_offset(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

/// Layout snapshot of one `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section under the scroll probe. Last match wins on overlap;
/// `None` means the caller should leave the current highlight alone.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + SECTION_PROBE_OFFSET_PX;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

/// Whether a nav link's `href` points at `section_id`.
#[must_use]
pub fn link_targets(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(anchor_target) == Some(section_id)
}
