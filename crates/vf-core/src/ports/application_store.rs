//! Application store port.
//!
//! The remote service that owns application records. Every call carries the
//! caller's bearer token explicitly; nothing in this crate reaches into
//! ambient credential storage.

use async_trait::async_trait;
use thiserror::Error;

use crate::application::{ApplicationForm, ApplicationRecord, CreatedApplication};
use crate::auth::AccessToken;
use crate::ids::ApplicationId;
use crate::wizard::WizardProgress;

#[async_trait]
pub trait ApplicationStorePort: Send + Sync {
    /// Create a new application record from the current form.
    async fn create(
        &self,
        token: &AccessToken,
        form: &ApplicationForm,
    ) -> Result<CreatedApplication, StoreError>;

    /// Fetch a stored record, e.g. to resume a draft.
    async fn fetch(
        &self,
        token: &AccessToken,
        id: &ApplicationId,
    ) -> Result<ApplicationRecord, StoreError>;

    /// Overwrite an existing record with the form and progress snapshot.
    async fn update(
        &self,
        token: &AccessToken,
        id: &ApplicationId,
        form: &ApplicationForm,
        progress: &WizardProgress,
    ) -> Result<(), StoreError>;

    /// Submit a draft for processing. Drafts only.
    async fn submit(&self, token: &AccessToken, id: &ApplicationId) -> Result<(), StoreError>;

    /// Delete a draft. Drafts only.
    async fn delete(&self, token: &AccessToken, id: &ApplicationId) -> Result<(), StoreError>;
}

/// Failures reported by an application store.
///
/// Server messages are carried through verbatim so the UI can show them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not authorized: {0}")]
    Unauthorized(String),

    #[error("application not found")]
    NotFound,

    #[error("store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("request timed out")]
    Timeout,

    #[error("transport failure: {0}")]
    Transport(String),
}
