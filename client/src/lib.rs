//! # client
//!
//! WASM behavior layer for the Estate Company landing page.
//!
//! The page itself is static HTML served by the `estate-site` host. This crate
//! binds to it at load time and drives navigation, scroll effects, the contact
//! form, and decorative animations.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Tunable timings and thresholds, optionally read from the page |
//! | [`state`] | Browser-free decision logic for every controller |
//! | [`net`] | Contact form transport boundary |
//! | [`util`] | Rate limiting plus DOM helpers (`hydrate` only) |
//! | `components` | DOM controllers (`hydrate` only) |
//! | `app` | Boot sequence and the WASM entry point (`hydrate` only) |

pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;
