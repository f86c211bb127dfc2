//! # vf-core
//!
//! Core domain models and business logic for Visaflow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod application;
pub mod auth;
pub mod ids;
pub mod ports;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use application::{
    ApplicationForm, ApplicationRecord, ApplicationStatus, CreatedApplication, PassportInfo,
    PersonalInfo, TravelDetails, VisaType, VisaTypeId,
};
pub use auth::AccessToken;
pub use ids::{ApplicationId, ApplicationNumber};
pub use wizard::{FormField, Step, StepError, StepKind, WizardProgress, WizardSession};
