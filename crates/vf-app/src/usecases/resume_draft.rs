//! Use case for resuming a saved draft.
//!
//! Fetches the stored record and rebuilds a wizard controller positioned at
//! the step the applicant reached, with the record's identity already bound
//! so the next save is an update.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use vf_core::application::ApplicationStatus;
use vf_core::auth::AccessToken;
use vf_core::ids::ApplicationId;
use vf_core::ports::{ApplicationStorePort, StoreError};

use crate::controller::WizardController;

pub struct ResumeDraft {
    store: Arc<dyn ApplicationStorePort>,
}

impl ResumeDraft {
    pub fn new(store: Arc<dyn ApplicationStorePort>) -> Self {
        Self { store }
    }

    /// Rebuild an editing session from a stored draft.
    ///
    /// Only drafts can be resumed: anything already submitted is owned by
    /// the processing pipeline and the store refuses edits to it anyway.
    pub async fn execute(
        &self,
        token: &AccessToken,
        id: &ApplicationId,
    ) -> Result<WizardController, ResumeError> {
        let record = self.store.fetch(token, id).await?;

        if !record.is_editable() {
            return Err(ResumeError::NotEditable {
                status: record.status,
            });
        }

        info!(%id, step = record.current_step, "draft resumed");
        Ok(WizardController::from_record(self.store.clone(), record))
    }
}

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("application is {status}, only drafts can be edited")]
    NotEditable { status: ApplicationStatus },

    #[error(transparent)]
    Store(#[from] StoreError),
}
