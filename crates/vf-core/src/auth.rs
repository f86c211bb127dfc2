//! Caller credential context.
//!
//! The application store requires a bearer credential on every call. Credential
//! acquisition and storage are out of scope; callers hand a token to the wizard
//! explicitly instead of the persistence layer reaching into ambient state.

use std::fmt;

/// Bearer token attached to application store requests.
///
/// Never logged or displayed in full. Read access is only through [`AccessToken::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    inner: String,
}

impl AccessToken {
    /// Wrap a raw bearer token.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Borrow the inner token as &str.
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<&str> for AccessToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
