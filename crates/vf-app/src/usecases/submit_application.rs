//! Use case for submitting a completed application.
//!
//! Submission is a deliberate, separate action: the wizard reaching its
//! terminal step only marks the draft as ready, it never submits on its own.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use vf_core::auth::AccessToken;
use vf_core::ids::ApplicationId;
use vf_core::ports::ApplicationStorePort;

pub struct SubmitApplication {
    store: Arc<dyn ApplicationStorePort>,
}

impl SubmitApplication {
    pub fn new(store: Arc<dyn ApplicationStorePort>) -> Self {
        Self { store }
    }

    /// Hand the draft over for processing. Drafts only; the store rejects
    /// anything already submitted.
    pub async fn execute(&self, token: &AccessToken, id: &ApplicationId) -> anyhow::Result<()> {
        self.store
            .submit(token, id)
            .await
            .with_context(|| format!("submitting application {id}"))?;
        info!(%id, "application submitted");
        Ok(())
    }
}
