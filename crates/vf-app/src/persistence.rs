//! Draft persistence.
//!
//! Translates the wizard's save intent into create-or-update calls on the
//! application store. The first successful save records the store-assigned
//! identity; every later save in the same session updates that record and
//! never creates a second one. Callers must be authenticated: without a
//! token no network call is attempted at all.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use vf_core::application::{ApplicationForm, CreatedApplication};
use vf_core::auth::AccessToken;
use vf_core::ids::ApplicationId;
use vf_core::ports::{ApplicationStorePort, StoreError};
use vf_core::wizard::{SaveMode, WizardSession};

/// What a successful save did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveReceipt {
    /// A new record was created; the session should adopt this identity.
    Created(CreatedApplication),
    /// The existing record was overwritten.
    Updated,
}

/// Saves drafts through an [`ApplicationStorePort`].
pub struct DraftPersister {
    store: Arc<dyn ApplicationStorePort>,
}

impl std::fmt::Debug for DraftPersister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftPersister").finish_non_exhaustive()
    }
}

impl DraftPersister {
    pub fn new(store: Arc<dyn ApplicationStorePort>) -> Self {
        Self { store }
    }

    /// Persist the form for this session.
    ///
    /// Create on the first save, update addressed by the recorded id
    /// afterwards. Updates carry the session's progress snapshot so the
    /// draft can be resumed at the same step later.
    pub async fn save(
        &self,
        token: Option<&AccessToken>,
        form: &ApplicationForm,
        session: &WizardSession,
    ) -> Result<SaveReceipt, SaveError> {
        let token = token.ok_or(SaveError::AuthenticationRequired)?;

        match session.save_mode() {
            SaveMode::Create => {
                let created = self
                    .store
                    .create(token, form)
                    .await
                    .map_err(SaveError::CreateFailed)?;
                debug!(id = %created.id, number = %created.application_number, "draft created");
                Ok(SaveReceipt::Created(created))
            }
            SaveMode::Update(id) => {
                let progress = session.progress();
                self.store
                    .update(token, &id, form, &progress)
                    .await
                    .map_err(|source| SaveError::UpdateFailed {
                        id: id.clone(),
                        source,
                    })?;
                debug!(id = %id, step = progress.current_step, "draft updated");
                Ok(SaveReceipt::Updated)
            }
        }
    }
}

/// Failures while persisting a draft.
#[derive(Debug, Error)]
pub enum SaveError {
    /// No credential was supplied; no network call was made.
    #[error("authentication required")]
    AuthenticationRequired,

    #[error("could not create application: {0}")]
    CreateFailed(#[source] StoreError),

    #[error("could not update application {id}: {source}")]
    UpdateFailed {
        id: ApplicationId,
        #[source]
        source: StoreError,
    },
}

impl SaveError {
    /// The underlying store failure, if the store was reached.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            SaveError::AuthenticationRequired => None,
            SaveError::CreateFailed(source) => Some(source),
            SaveError::UpdateFailed { source, .. } => Some(source),
        }
    }

    /// True when the store itself turned the credential away.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self.store_error(), Some(StoreError::Unauthorized(_)))
    }
}
