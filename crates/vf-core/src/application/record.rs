//! Stored application records as returned by the application store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::form::ApplicationForm;
use super::status::ApplicationStatus;
use crate::ids::{ApplicationId, ApplicationNumber};

/// Result of a successful create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedApplication {
    pub id: ApplicationId,
    pub application_number: ApplicationNumber,
}

/// A full application record fetched from the store.
///
/// Carries everything needed to resume an editing session: the saved form,
/// the step the applicant reached, and the record's lifecycle status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub application_number: ApplicationNumber,
    pub status: ApplicationStatus,
    pub form: ApplicationForm,
    pub current_step: u32,
    pub completed_steps: Vec<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl ApplicationRecord {
    /// Whether the wizard may still edit this record.
    pub fn is_editable(&self) -> bool {
        self.status.is_draft()
    }
}
