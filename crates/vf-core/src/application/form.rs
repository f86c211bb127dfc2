//! The mutable application draft.
//!
//! Field groups hold exactly what the applicant typed; text fields default to
//! empty strings rather than `Option` so a half-filled step can be saved and
//! resumed without losing the distinction at the edit layer. Normalizing empty
//! optional dates to an explicit absent value happens at the wire boundary, not
//! here.

use serde::{Deserialize, Serialize};

use super::visa::VisaType;

/// Everything the wizard collects across its steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub visa_type: Option<VisaType>,
    pub personal: PersonalInfo,
    pub travel: TravelDetails,
    pub passport: PassportInfo,
}

/// Applicant identity fields (wizard step 2).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub citizenship: String,
    /// ISO date as entered, may be empty
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub gender: String,
}

/// Trip details (wizard step 3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelDetails {
    pub purpose: String,
    /// ISO date as entered, may be empty
    pub arrival_date: String,
    /// ISO date as entered, may be empty
    pub departure_date: String,
    pub accommodation: String,
    pub previous_visits: bool,
}

/// Passport fields (wizard step 4).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassportInfo {
    pub number: String,
    /// ISO date as entered, may be empty
    pub issue_date: String,
    /// ISO date as entered, may be empty
    pub expiry_date: String,
    pub issuing_country: String,
}
