//! Application lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-side lifecycle of a stored application.
///
/// The wizard only ever edits `Draft` records; everything after `Submitted`
/// is driven by the concierge backoffice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    Processing,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn is_draft(&self) -> bool {
        matches!(self, ApplicationStatus::Draft)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Processing => "processing",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Submitted).unwrap(),
            "\"submitted\""
        );
    }

    #[test]
    fn test_only_draft_is_editable() {
        assert!(ApplicationStatus::Draft.is_draft());
        assert!(!ApplicationStatus::Processing.is_draft());
    }
}
