//! DOM controllers bound to the static landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller is attached once by `app::boot`. `attach` acquires the
//! element handles it needs, registers its listeners for the page lifetime,
//! and returns `None` when the page lacks the controller's root element.
//!
//! Decisions live in `crate::state`; controllers only read DOM inputs and
//! apply the results.

pub mod accessibility;
pub mod back_to_top;
pub mod contact_form;
pub mod lazy_load;
pub mod navigation;
pub mod parallax;
pub mod performance_monitor;
pub mod property_cards;
pub mod scroll_animations;
pub mod stats_counter;
