//! Wizard session state.
//!
//! Pure progress tracking for one application-editing session: the active
//! step, the remote record identity once the first save lands, and the
//! message slots the UI reads. The session never performs I/O; the
//! controller in `vf-app` drives it and applies save results.

use serde::{Deserialize, Serialize};

use crate::application::CreatedApplication;
use crate::ids::{ApplicationId, ApplicationNumber};
use crate::wizard::step;

/// Whether the next save must create a record or update an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update(ApplicationId),
}

/// Progress snapshot sent with every update so a draft can be resumed later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardProgress {
    pub current_step: u32,
    pub completed_steps: Vec<u32>,
}

/// Mutable progress state for one editing session.
///
/// Owned by a single wizard controller; there is exactly one writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSession {
    current_step: u32,
    remote_id: Option<ApplicationId>,
    application_number: Option<ApplicationNumber>,
    last_error: Option<String>,
    last_success: Option<String>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self {
            current_step: 1,
            remote_id: None,
            application_number: None,
            last_error: None,
            last_success: None,
        }
    }
}

impl WizardSession {
    /// Fresh session at step 1 with no remote record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session rebuilt from a stored draft.
    ///
    /// The saved step is clamped into the step table so a record written by a
    /// newer deployment cannot park the wizard on a step that does not exist.
    pub fn resumed(
        id: ApplicationId,
        application_number: ApplicationNumber,
        saved_step: u32,
    ) -> Self {
        if saved_step == 0 || saved_step > step::step_count() {
            tracing::warn!(saved_step, "stored step outside the table, clamping");
        }
        Self {
            current_step: saved_step.clamp(1, step::step_count()),
            remote_id: Some(id),
            application_number: Some(application_number),
            last_error: None,
            last_success: None,
        }
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn remote_id(&self) -> Option<&ApplicationId> {
        self.remote_id.as_ref()
    }

    pub fn application_number(&self) -> Option<&ApplicationNumber> {
        self.application_number.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_success(&self) -> Option<&str> {
        self.last_success.as_deref()
    }

    /// True once the session sits on the terminal step.
    pub fn is_complete(&self) -> bool {
        self.current_step >= step::step_count()
    }

    /// How the next save must address the store.
    pub fn save_mode(&self) -> SaveMode {
        match &self.remote_id {
            Some(id) => SaveMode::Update(id.clone()),
            None => SaveMode::Create,
        }
    }

    /// Snapshot sent alongside updates. Completed steps are everything before
    /// the active one.
    pub fn progress(&self) -> WizardProgress {
        WizardProgress {
            current_step: self.current_step,
            completed_steps: (1..self.current_step).collect(),
        }
    }

    /// Clear both message slots. Every advance attempt starts here.
    pub fn clear_messages(&mut self) {
        self.last_error = None;
        self.last_success = None;
    }

    /// Record the identity handed back by a successful create.
    ///
    /// All subsequent saves in this session become updates against this id.
    pub fn record_created(&mut self, created: CreatedApplication) {
        self.remote_id = Some(created.id);
        self.application_number = Some(created.application_number);
    }

    /// Move forward after a successful validate+save cycle, capped at the
    /// terminal step.
    pub fn advance_step(&mut self) -> u32 {
        if self.current_step < step::step_count() {
            self.current_step += 1;
        }
        self.current_step
    }

    /// Move back one step, floored at 1. Never validates, never saves.
    pub fn retreat_step(&mut self) -> u32 {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
        self.current_step
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.last_success = None;
    }

    pub fn record_success(&mut self, message: impl Into<String>) {
        self.last_success = Some(message.into());
        self.last_error = None;
    }
}
