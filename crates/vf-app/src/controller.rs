//! Wizard controller.
//!
//! Owns the form and session for one application-editing flow and drives the
//! validate → save → advance cycle. Every mutation takes `&mut self`, so two
//! advances can never run concurrently for the same session; if an advance is
//! cancelled mid-save, the session is untouched because it is only updated
//! after the store call resolves.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use vf_core::application::{ApplicationForm, ApplicationRecord};
use vf_core::auth::AccessToken;
use vf_core::ids::{ApplicationId, ApplicationNumber};
use vf_core::ports::ApplicationStorePort;
use vf_core::wizard::{step, FormField, Step, WizardSession};

use crate::persistence::{DraftPersister, SaveError, SaveReceipt};

const READY_FOR_SUBMISSION: &str = "Your application is complete and ready to submit";
const SIGN_IN_PROMPT: &str = "Please sign in to save your application";
const SESSION_EXPIRED: &str = "Your session has expired, please sign in and try again";

/// Result of a successful advance request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the given step after a successful save.
    Advanced { step: u32 },
    /// Already at the terminal step; nothing was validated or saved.
    Complete,
}

/// Why an advance request was refused. The session keeps a user-facing copy
/// of the same message in `last_error`.
#[derive(Debug, Error)]
pub enum AdvanceError {
    #[error("step {step} is missing required fields: {}", join_fields(.missing))]
    Validation { step: u32, missing: Vec<FormField> },

    /// Sign in first, then retry the same advance.
    #[error("authentication required")]
    AuthenticationRequired,

    #[error(transparent)]
    Persistence(SaveError),
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Drives one applicant through the wizard.
#[derive(Debug)]
pub struct WizardController {
    form: ApplicationForm,
    session: WizardSession,
    persister: DraftPersister,
    credentials: Option<AccessToken>,
}

impl WizardController {
    /// Fresh wizard at step 1 with a blank form.
    pub fn new(store: Arc<dyn ApplicationStorePort>) -> Self {
        Self {
            form: ApplicationForm::default(),
            session: WizardSession::new(),
            persister: DraftPersister::new(store),
            credentials: None,
        }
    }

    /// Wizard rebuilt from a stored draft, positioned at its saved step.
    pub fn from_record(store: Arc<dyn ApplicationStorePort>, record: ApplicationRecord) -> Self {
        let session =
            WizardSession::resumed(record.id, record.application_number, record.current_step);
        Self {
            form: record.form,
            session,
            persister: DraftPersister::new(store),
            credentials: None,
        }
    }

    /// Supply or clear the caller's credential context. The wizard never
    /// reads tokens from anywhere else.
    pub fn set_credentials(&mut self, token: Option<AccessToken>) {
        self.credentials = token;
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ApplicationForm {
        &mut self.form
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn remote_id(&self) -> Option<&ApplicationId> {
        self.session.remote_id()
    }

    pub fn application_number(&self) -> Option<&ApplicationNumber> {
        self.session.application_number()
    }

    /// The active step, for display.
    pub fn current_step_info(&self) -> &'static Step {
        // The session keeps current_step inside the table by construction.
        step::step_at(self.session.current_step()).expect("session step within the step table")
    }

    /// Validate the active step, persist the draft, and move forward.
    ///
    /// Order matters: validation failures never reach the network, and the
    /// step pointer only moves once the save has landed. Retries are always
    /// explicit fresh calls; nothing is retried internally.
    pub async fn advance(&mut self) -> Result<AdvanceOutcome, AdvanceError> {
        self.session.clear_messages();

        if self.session.is_complete() {
            self.session.record_success(READY_FOR_SUBMISSION);
            return Ok(AdvanceOutcome::Complete);
        }

        let info = self.current_step_info();
        if let Err(missing) = info.kind.validate(&self.form) {
            let error = AdvanceError::Validation {
                step: info.order,
                missing,
            };
            debug!(step = info.order, %error, "advance refused by validation");
            self.session.record_error(error.to_string());
            return Err(error);
        }

        match self
            .persister
            .save(self.credentials.as_ref(), &self.form, &self.session)
            .await
        {
            Ok(SaveReceipt::Created(created)) => self.session.record_created(created),
            Ok(SaveReceipt::Updated) => {}
            Err(SaveError::AuthenticationRequired) => {
                self.session.record_error(SIGN_IN_PROMPT);
                return Err(AdvanceError::AuthenticationRequired);
            }
            Err(error) if error.is_auth_rejection() => {
                warn!(step = info.order, %error, "store rejected the credential");
                self.session.record_error(SESSION_EXPIRED);
                return Err(AdvanceError::AuthenticationRequired);
            }
            Err(error) => {
                warn!(step = info.order, %error, "draft save failed");
                self.session.record_error(error.to_string());
                return Err(AdvanceError::Persistence(error));
            }
        }

        let step = self.session.advance_step();
        debug!(step, "advanced");
        if self.session.is_complete() {
            self.session.record_success(READY_FOR_SUBMISSION);
        } else {
            self.session.record_success("Draft saved");
        }
        Ok(AdvanceOutcome::Advanced { step })
    }

    /// Go back one step, floored at step 1. No validation, no save.
    pub fn retreat(&mut self) -> u32 {
        let step = self.session.retreat_step();
        debug!(step, "retreated");
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;
    use vf_core::application::{CreatedApplication, VisaTypeId};
    use vf_core::ports::StoreError;
    use vf_core::wizard::WizardProgress;

    mock! {
        pub Store {}

        #[async_trait]
        impl ApplicationStorePort for Store {
            async fn create(
                &self,
                token: &AccessToken,
                form: &ApplicationForm,
            ) -> Result<CreatedApplication, StoreError>;
            async fn fetch(
                &self,
                token: &AccessToken,
                id: &ApplicationId,
            ) -> Result<ApplicationRecord, StoreError>;
            async fn update(
                &self,
                token: &AccessToken,
                id: &ApplicationId,
                form: &ApplicationForm,
                progress: &WizardProgress,
            ) -> Result<(), StoreError>;
            async fn submit(
                &self,
                token: &AccessToken,
                id: &ApplicationId,
            ) -> Result<(), StoreError>;
            async fn delete(
                &self,
                token: &AccessToken,
                id: &ApplicationId,
            ) -> Result<(), StoreError>;
        }
    }

    fn created() -> CreatedApplication {
        CreatedApplication {
            id: ApplicationId::from("app_123"),
            application_number: ApplicationNumber::from("USA-20260807-A1B2"),
        }
    }

    fn authed(store: MockStore) -> WizardController {
        let mut controller = WizardController::new(Arc::new(store));
        controller.set_credentials(Some(AccessToken::new("token")));
        controller
    }

    fn fill_step(controller: &mut WizardController, step: u32) {
        let form = controller.form_mut();
        match step {
            1 => form.visa_type = Some(VisaTypeId::Tourist.offering()),
            2 => {
                form.personal.full_name = "Jane Doe".to_string();
                form.personal.email = "jane@x.com".to_string();
                form.personal.citizenship = "US".to_string();
            }
            3 => {
                form.travel.purpose = "Tourism".to_string();
                form.travel.arrival_date = "2026-09-01".to_string();
            }
            4 => {
                form.passport.number = "X1234567".to_string();
                form.passport.expiry_date = "2030-01-01".to_string();
            }
            _ => {}
        }
    }

    #[tokio::test]
    async fn test_validation_failure_alone_never_reaches_the_store() {
        let mut store = MockStore::new();
        store.expect_create().times(0);
        store.expect_update().times(0);

        let mut controller = authed(store);
        let err = controller.advance().await.unwrap_err();
        assert!(matches!(err, AdvanceError::Validation { step: 1, .. }));
        assert_eq!(controller.session().current_step(), 1);
    }

    #[tokio::test]
    async fn test_every_field_step_refuses_to_advance_while_incomplete() {
        let mut store = MockStore::new();
        store.expect_create().returning(|_, _| Ok(created()));
        store.expect_update().returning(|_, _, _, _| Ok(()));

        let mut controller = authed(store);
        for step in 1..=4 {
            let err = controller.advance().await.unwrap_err();
            assert!(
                matches!(err, AdvanceError::Validation { step: s, .. } if s == step),
                "step {step} should fail validation"
            );
            assert_eq!(controller.session().current_step(), step);
            assert!(controller.session().last_error().is_some());
            // Unblock this step for the next loop iteration, leaving the
            // following one empty.
            fill_step(&mut controller, step);
            controller.advance().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_validation_error_names_the_missing_fields() {
        let mut store = MockStore::new();
        store.expect_create().returning(|_, _| Ok(created()));
        let mut controller = authed(store);
        fill_step(&mut controller, 1);
        controller.advance().await.ok();

        let err = controller.advance().await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("full name"));
        assert!(message.contains("email"));
        assert!(message.contains("citizenship"));
        assert_eq!(controller.session().last_error(), Some(message.as_str()));
    }

    #[tokio::test]
    async fn test_each_valid_step_advances_by_exactly_one() {
        let mut store = MockStore::new();
        store
            .expect_create()
            .times(1)
            .returning(|_, _| Ok(created()));
        store.expect_update().returning(|_, _, _, _| Ok(()));

        let mut controller = authed(store);
        for step in 1..=4 {
            fill_step(&mut controller, step);
            let outcome = controller.advance().await.unwrap();
            assert_eq!(outcome, AdvanceOutcome::Advanced { step: step + 1 });
        }
        assert_eq!(controller.session().current_step(), 5);
        assert_eq!(controller.session().last_success(), Some("Draft saved"));
    }

    #[tokio::test]
    async fn test_second_save_updates_the_created_record() {
        let mut store = MockStore::new();
        store
            .expect_create()
            .times(1)
            .returning(|_, _| Ok(created()));
        store
            .expect_update()
            .with(
                mockall::predicate::always(),
                eq(ApplicationId::from("app_123")),
                mockall::predicate::always(),
                mockall::predicate::always(),
            )
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let mut controller = authed(store);
        fill_step(&mut controller, 1);
        controller.advance().await.unwrap();
        assert_eq!(controller.remote_id(), Some(&ApplicationId::from("app_123")));

        fill_step(&mut controller, 2);
        controller.advance().await.unwrap();
    }

    #[tokio::test]
    async fn test_unauthenticated_advance_prompts_for_sign_in() {
        let mut store = MockStore::new();
        store.expect_create().times(0);

        let mut controller = WizardController::new(Arc::new(store));
        fill_step(&mut controller, 1);

        let err = controller.advance().await.unwrap_err();
        assert!(matches!(err, AdvanceError::AuthenticationRequired));
        assert_eq!(controller.session().current_step(), 1);
        assert_eq!(
            controller.session().last_error(),
            Some("Please sign in to save your application")
        );
    }

    #[tokio::test]
    async fn test_store_401_maps_to_authentication_required() {
        let mut store = MockStore::new();
        store.expect_create().returning(|_, _| {
            Err(StoreError::Unauthorized(
                "Invalid authentication credentials".to_string(),
            ))
        });

        let mut controller = authed(store);
        fill_step(&mut controller, 1);

        let err = controller.advance().await.unwrap_err();
        assert!(matches!(err, AdvanceError::AuthenticationRequired));
        assert_eq!(controller.session().current_step(), 1);
    }

    #[tokio::test]
    async fn test_persistence_failure_keeps_step_and_passes_message_through() {
        let mut store = MockStore::new();
        store.expect_create().returning(|_, _| {
            Err(StoreError::Rejected {
                status: 503,
                message: "maintenance window".to_string(),
            })
        });

        let mut controller = authed(store);
        fill_step(&mut controller, 1);

        let err = controller.advance().await.unwrap_err();
        assert!(matches!(err, AdvanceError::Persistence(_)));
        assert_eq!(controller.session().current_step(), 1);
        assert!(controller
            .session()
            .last_error()
            .unwrap()
            .contains("maintenance window"));
    }

    #[tokio::test]
    async fn test_advance_at_terminal_step_is_a_save_free_no_op() {
        let mut store = MockStore::new();
        store
            .expect_create()
            .times(1)
            .returning(|_, _| Ok(created()));
        store.expect_update().returning(|_, _, _, _| Ok(()));

        let mut controller = authed(store);
        for step in 1..=5 {
            fill_step(&mut controller, step);
            controller.advance().await.unwrap();
        }
        assert_eq!(controller.session().current_step(), 6);
        assert!(controller.session().is_complete());

        // One create + four updates so far; the terminal advance adds nothing.
        let outcome = controller.advance().await.unwrap();
        assert_eq!(outcome, AdvanceOutcome::Complete);
        assert_eq!(controller.session().current_step(), 6);
        assert_eq!(
            controller.session().last_success(),
            Some("Your application is complete and ready to submit")
        );
    }

    #[tokio::test]
    async fn test_retreat_floors_at_step_one_without_saving() {
        let mut store = MockStore::new();
        store.expect_create().times(0);
        store.expect_update().times(0);

        let mut controller = authed(store);
        assert_eq!(controller.retreat(), 1);
        assert_eq!(controller.current_step_info().order, 1);
    }

    #[tokio::test]
    async fn test_jane_doe_scenario() {
        // visa selected + personal filled → step 1 advances; clearing the
        // name makes step 2 refuse and stay.
        let mut store = MockStore::new();
        store
            .expect_create()
            .times(1)
            .returning(|_, _| Ok(created()));
        store.expect_update().times(0);

        let mut controller = authed(store);
        fill_step(&mut controller, 1);
        fill_step(&mut controller, 2);

        let outcome = controller.advance().await.unwrap();
        assert_eq!(outcome, AdvanceOutcome::Advanced { step: 2 });

        controller.form_mut().personal.full_name.clear();
        let err = controller.advance().await.unwrap_err();
        assert!(matches!(
            err,
            AdvanceError::Validation { step: 2, .. }
        ));
        assert_eq!(controller.session().current_step(), 2);
    }
}
