//! Visa application domain models.
//!
//! The application aggregate collected by the wizard: the visa offering the
//! applicant selected plus the personal, travel and passport field groups.

pub mod form;
pub mod record;
pub mod status;
pub mod visa;

pub use form::{ApplicationForm, PassportInfo, PersonalInfo, TravelDetails};
pub use record::{ApplicationRecord, CreatedApplication};
pub use status::ApplicationStatus;
pub use visa::{VisaType, VisaTypeId};
