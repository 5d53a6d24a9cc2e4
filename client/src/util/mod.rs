//! Utility helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `rate_limit` is browser-free and always compiled; `dom` wraps `web-sys`
//! lookups, listeners, and observers and exists only in `hydrate` builds.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod rate_limit;
