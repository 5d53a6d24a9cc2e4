//! Browser-free controller state.
//!
//! DESIGN
//! ======
//! Each module holds the decisions one page controller makes: what the menu
//! flag is, which section is current, whether a field is valid, what a stat
//! frame reads. The `components` layer only gathers DOM inputs and applies
//! these outputs, so everything here runs under plain `cargo test`.

pub mod a11y;
pub mod contact_form;
pub mod counter;
pub mod lazy_image;
pub mod navigation;
pub mod perf;
pub mod reveal;
pub mod scroll;
pub mod validation;
