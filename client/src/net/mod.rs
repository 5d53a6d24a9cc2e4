//! Outbound boundary for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site makes no real network calls. `contact` defines the transport
//! trait the form submits through and the simulated implementation it ships
//! with.

pub mod contact;
