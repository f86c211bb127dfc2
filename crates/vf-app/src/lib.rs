//! Visaflow Application Orchestration Layer
//!
//! This crate contains the wizard controller, draft persistence, and the
//! standalone use cases built on the `vf-core` ports.

pub mod controller;
pub mod persistence;
pub mod usecases;

pub use controller::{AdvanceError, AdvanceOutcome, WizardController};
pub use persistence::{DraftPersister, SaveError, SaveReceipt};
pub use usecases::{ResumeDraft, ResumeError, SubmitApplication, WithdrawDraft};
