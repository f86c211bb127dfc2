//! Use case for withdrawing an unsubmitted draft.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use vf_core::auth::AccessToken;
use vf_core::ids::ApplicationId;
use vf_core::ports::ApplicationStorePort;

pub struct WithdrawDraft {
    store: Arc<dyn ApplicationStorePort>,
}

impl WithdrawDraft {
    pub fn new(store: Arc<dyn ApplicationStorePort>) -> Self {
        Self { store }
    }

    /// Delete the draft from the store. Submitted applications cannot be
    /// withdrawn here.
    pub async fn execute(&self, token: &AccessToken, id: &ApplicationId) -> anyhow::Result<()> {
        self.store
            .delete(token, id)
            .await
            .with_context(|| format!("withdrawing draft {id}"))?;
        info!(%id, "draft withdrawn");
        Ok(())
    }
}
