//! In-memory application store.
//!
//! Backs integration tests and local demos without a running backend. It
//! mirrors the remote store's rules: ids are assigned on create, updates
//! address an existing record, and submit/delete act on drafts only.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use vf_core::application::{
    ApplicationForm, ApplicationRecord, ApplicationStatus, CreatedApplication,
};
use vf_core::auth::AccessToken;
use vf_core::ids::{ApplicationId, ApplicationNumber};
use vf_core::ports::{ApplicationStorePort, StoreError};
use vf_core::wizard::WizardProgress;

#[derive(Default)]
pub struct InMemoryApplicationStore {
    records: Mutex<HashMap<ApplicationId, ApplicationRecord>>,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id() -> ApplicationId {
        ApplicationId::new(format!("app_{}", Uuid::new_v4().simple()))
    }

    /// Same reference shape the backend hands out: USA-YYYYMMDD-XXXX.
    fn next_number() -> ApplicationNumber {
        let tail: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(4)
            .collect::<String>()
            .to_uppercase();
        ApplicationNumber::new(format!("USA-{}-{}", Utc::now().format("%Y%m%d"), tail))
    }

    fn check_token(token: &AccessToken) -> Result<(), StoreError> {
        if token.expose().is_empty() {
            return Err(StoreError::Unauthorized("missing bearer token".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ApplicationStorePort for InMemoryApplicationStore {
    async fn create(
        &self,
        token: &AccessToken,
        form: &ApplicationForm,
    ) -> Result<CreatedApplication, StoreError> {
        Self::check_token(token)?;

        let now = Utc::now();
        let record = ApplicationRecord {
            id: Self::next_id(),
            application_number: Self::next_number(),
            status: ApplicationStatus::Draft,
            form: form.clone(),
            current_step: 1,
            completed_steps: Vec::new(),
            created_at: now,
            updated_at: now,
            submitted_at: None,
        };
        let created = CreatedApplication {
            id: record.id.clone(),
            application_number: record.application_number.clone(),
        };

        self.records
            .lock()
            .await
            .insert(record.id.clone(), record);
        Ok(created)
    }

    async fn fetch(
        &self,
        token: &AccessToken,
        id: &ApplicationId,
    ) -> Result<ApplicationRecord, StoreError> {
        Self::check_token(token)?;
        self.records
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update(
        &self,
        token: &AccessToken,
        id: &ApplicationId,
        form: &ApplicationForm,
        progress: &WizardProgress,
    ) -> Result<(), StoreError> {
        Self::check_token(token)?;

        let mut records = self.records.lock().await;
        let record = records.get_mut(id).ok_or(StoreError::NotFound)?;
        record.form = form.clone();
        record.current_step = progress.current_step;
        record.completed_steps = progress.completed_steps.clone();
        record.updated_at = Utc::now();
        Ok(())
    }

    async fn submit(&self, token: &AccessToken, id: &ApplicationId) -> Result<(), StoreError> {
        Self::check_token(token)?;

        let mut records = self.records.lock().await;
        let record = records.get_mut(id).ok_or(StoreError::NotFound)?;
        if !record.status.is_draft() {
            return Err(StoreError::Rejected {
                status: 409,
                message: "application already submitted".to_string(),
            });
        }
        record.status = ApplicationStatus::Submitted;
        record.submitted_at = Some(Utc::now());
        record.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, token: &AccessToken, id: &ApplicationId) -> Result<(), StoreError> {
        Self::check_token(token)?;

        let mut records = self.records.lock().await;
        match records.get(id) {
            None => Err(StoreError::NotFound),
            Some(record) if !record.status.is_draft() => Err(StoreError::Rejected {
                status: 409,
                message: "only drafts can be deleted".to_string(),
            }),
            Some(_) => {
                records.remove(id);
                Ok(())
            }
        }
    }
}
