//! # visaflow
//!
//! Composition layer for the visa application wizard: wires the HTTP
//! application store into ready-to-use controllers and use cases, and
//! re-exports the public surface of the workspace crates.

use std::sync::Arc;

pub mod logging;

pub use vf_app::{
    AdvanceError, AdvanceOutcome, DraftPersister, ResumeDraft, ResumeError, SaveError,
    SaveReceipt, SubmitApplication, WithdrawDraft, WizardController,
};
pub use vf_core::ports::ApplicationStorePort;
pub use vf_core::{
    AccessToken, ApplicationForm, ApplicationId, ApplicationNumber, ApplicationRecord,
    ApplicationStatus, FormField, Step, StepKind, VisaType, VisaTypeId, WizardSession,
};
pub use vf_infra::{HttpApplicationStore, InMemoryApplicationStore, StoreConfig};

/// Connect to the configured backend and return the shared store handle.
pub fn http_store(config: &StoreConfig) -> anyhow::Result<Arc<HttpApplicationStore>> {
    tracing::debug!(base_url = %config.base_url, "connecting to application store");
    Ok(Arc::new(HttpApplicationStore::new(config)?))
}

/// A fresh wizard backed by the remote application store.
pub fn http_wizard(config: &StoreConfig) -> anyhow::Result<WizardController> {
    Ok(WizardController::new(http_store(config)?))
}
