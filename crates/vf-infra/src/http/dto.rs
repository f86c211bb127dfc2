//! Wire shapes for the visa application REST API.
//!
//! Field names are camelCase on the wire. Optional date fields the applicant
//! left blank are sent as absent rather than as empty strings, so the server
//! can tell "not yet entered" apart from a real value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vf_core::application::{
    ApplicationForm, ApplicationRecord, ApplicationStatus, PassportInfo, PersonalInfo,
    TravelDetails, VisaType,
};
use vf_core::ids::{ApplicationId, ApplicationNumber};
use vf_core::wizard::WizardProgress;

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Request body for create and update calls.
///
/// Create omits the progress fields; update carries the step the applicant
/// is on plus every step already completed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplicationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_type: Option<VisaType>,
    pub personal_info: PersonalInfoDto,
    pub travel_details: TravelDetailsDto,
    pub passport_info: PassportInfoDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_steps: Option<Vec<u32>>,
}

impl ApplicationPayload {
    pub fn for_create(form: &ApplicationForm) -> Self {
        Self::build(form, None)
    }

    pub fn for_update(form: &ApplicationForm, progress: &WizardProgress) -> Self {
        Self::build(form, Some(progress))
    }

    fn build(form: &ApplicationForm, progress: Option<&WizardProgress>) -> Self {
        Self {
            visa_type: form.visa_type.clone(),
            personal_info: PersonalInfoDto::from_domain(&form.personal),
            travel_details: TravelDetailsDto::from_domain(&form.travel),
            passport_info: PassportInfoDto::from_domain(&form.passport),
            current_step: progress.map(|p| p.current_step),
            completed_steps: progress.map(|p| p.completed_steps.clone()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersonalInfoDto {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub citizenship: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl PersonalInfoDto {
    fn from_domain(personal: &PersonalInfo) -> Self {
        Self {
            full_name: Some(personal.full_name.clone()),
            email: Some(personal.email.clone()),
            phone: Some(personal.phone.clone()),
            citizenship: Some(personal.citizenship.clone()),
            date_of_birth: blank_to_none(&personal.date_of_birth),
            place_of_birth: Some(personal.place_of_birth.clone()),
            gender: Some(personal.gender.clone()),
        }
    }

    fn into_domain(self) -> PersonalInfo {
        PersonalInfo {
            full_name: self.full_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            citizenship: self.citizenship.unwrap_or_default(),
            date_of_birth: self.date_of_birth.unwrap_or_default(),
            place_of_birth: self.place_of_birth.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TravelDetailsDto {
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub accommodation: Option<String>,
    #[serde(default)]
    pub previous_visits: Option<bool>,
}

impl TravelDetailsDto {
    fn from_domain(travel: &TravelDetails) -> Self {
        Self {
            purpose: Some(travel.purpose.clone()),
            arrival_date: blank_to_none(&travel.arrival_date),
            departure_date: blank_to_none(&travel.departure_date),
            accommodation: Some(travel.accommodation.clone()),
            previous_visits: Some(travel.previous_visits),
        }
    }

    fn into_domain(self) -> TravelDetails {
        TravelDetails {
            purpose: self.purpose.unwrap_or_default(),
            arrival_date: self.arrival_date.unwrap_or_default(),
            departure_date: self.departure_date.unwrap_or_default(),
            accommodation: self.accommodation.unwrap_or_default(),
            previous_visits: self.previous_visits.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PassportInfoDto {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub issuing_country: Option<String>,
}

impl PassportInfoDto {
    fn from_domain(passport: &PassportInfo) -> Self {
        Self {
            number: Some(passport.number.clone()),
            issue_date: blank_to_none(&passport.issue_date),
            expiry_date: blank_to_none(&passport.expiry_date),
            issuing_country: Some(passport.issuing_country.clone()),
        }
    }

    fn into_domain(self) -> PassportInfo {
        PassportInfo {
            number: self.number.unwrap_or_default(),
            issue_date: self.issue_date.unwrap_or_default(),
            expiry_date: self.expiry_date.unwrap_or_default(),
            issuing_country: self.issuing_country.unwrap_or_default(),
        }
    }
}

/// Standard response wrapper the backend puts around every payload.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `data` object of a successful create.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedDto {
    pub application_id: String,
    pub application_number: String,
}

/// Error body: FastAPI-style `detail`, with `message` as a fallback.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_step() -> u32 {
    1
}

/// A stored application as the backend returns it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplicationRecordDto {
    pub id: String,
    pub application_number: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub visa_type: Option<VisaType>,
    pub personal_info: PersonalInfoDto,
    pub travel_details: TravelDetailsDto,
    pub passport_info: PassportInfoDto,
    #[serde(default = "default_step")]
    pub current_step: u32,
    #[serde(default)]
    pub completed_steps: Vec<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl ApplicationRecordDto {
    pub fn into_record(self) -> ApplicationRecord {
        ApplicationRecord {
            id: ApplicationId::from(self.id),
            application_number: ApplicationNumber::from(self.application_number),
            status: self.status,
            form: ApplicationForm {
                visa_type: self.visa_type,
                personal: self.personal_info.into_domain(),
                travel: self.travel_details.into_domain(),
                passport: self.passport_info.into_domain(),
            },
            current_step: self.current_step,
            completed_steps: self.completed_steps,
            created_at: self.created_at,
            updated_at: self.updated_at,
            submitted_at: self.submitted_at,
        }
    }
}
