//! Standalone use cases around the wizard.
//!
//! Each use case is a small struct over the store port, constructed with
//! `new` and driven with `execute`, so callers can wire them with whatever
//! adapter they compose.

pub mod resume_draft;
pub mod submit_application;
pub mod withdraw_draft;

pub use resume_draft::{ResumeDraft, ResumeError};
pub use submit_application::SubmitApplication;
pub use withdraw_draft::WithdrawDraft;
