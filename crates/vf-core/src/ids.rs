//! ID type wrappers for type safety.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque identifier assigned by the application store on create.
/// This is different from the human-facing ApplicationNumber shown to applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ApplicationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ApplicationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ApplicationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Human-facing application reference
/// Format: "USA-{YYYYMMDD}-{4 alphanumeric}"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationNumber(String);

impl ApplicationNumber {
    pub fn new(number: String) -> Self {
        Self(number)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate the reference format (USA-YYYYMMDD-XXXX)
    pub fn is_valid(&self) -> bool {
        let mut parts = self.0.split('-');
        matches!(
            (parts.next(), parts.next(), parts.next(), parts.next()),
            (Some("USA"), Some(date), Some(tail), None)
                if date.len() == 8
                    && date.chars().all(|c| c.is_ascii_digit())
                    && tail.len() == 4
                    && tail.chars().all(|c| c.is_ascii_alphanumeric())
        )
    }
}

impl Display for ApplicationNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ApplicationNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ApplicationNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
