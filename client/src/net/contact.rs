//! Contact form transport boundary.
//!
//! The form controller hands a [`ContactSubmission`] to a [`ContactTransport`]
//! and awaits the outcome. The shipped transport is [`SimulatedTransport`],
//! which encodes the payload and waits out a fixed latency without any network
//! I/O. Tests and future deployments swap in their own implementation.
//!
//! ERROR HANDLING
//! ==============
//! Transports report failures as [`SubmitError`] values; the controller turns
//! them into a failure banner and restores the form's submit button.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::state::validation::FieldSnapshot;

pub const DEFAULT_LATENCY_MS: u32 = 1500;

/// Named field values collected from the form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub fields: Vec<ContactField>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactField {
    pub name: String,
    pub value: String,
}

impl ContactSubmission {
    /// Collect trimmed values from every named control. Unnamed controls are skipped.
    #[must_use]
    pub fn from_fields(fields: &[FieldSnapshot]) -> Self {
        let fields = fields
            .iter()
            .filter(|field| !field.name.is_empty())
            .map(|field| ContactField { name: field.name.clone(), value: field.value.trim().to_owned() })
            .collect();
        Self { fields }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// JSON body a transport would send.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SubmitError> {
        serde_json::to_string(self).map_err(|e| SubmitError::Encode(e.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission encode failed: {0}")]
    Encode(String),
    #[error("submission transport failed: {0}")]
    Transport(String),
}

/// Delivers a contact submission somewhere.
///
/// `?Send` because the browser event loop is single-threaded and futures
/// hold `web-sys` handles.
#[async_trait::async_trait(?Send)]
pub trait ContactTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

/// Stand-in transport: validates and encodes the payload, then waits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedTransport {
    pub latency_ms: u32,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self { latency_ms: DEFAULT_LATENCY_MS }
    }
}

#[async_trait::async_trait(?Send)]
impl ContactTransport for SimulatedTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let payload = submission.to_json()?;
        #[cfg(feature = "hydrate")]
        {
            log::debug!("simulated contact submission ({} bytes)", payload.len());
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(self.latency_ms))).await;
        }
        #[cfg(not(feature = "hydrate"))]
        drop(payload);
        Ok(())
    }
}
