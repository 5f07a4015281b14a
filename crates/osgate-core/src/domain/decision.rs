//! Outcome of evaluating a declaration against the current environment.

use std::fmt;

use serde::Serialize;

/// Reason reported when the test may run.
pub const ENABLED_ON_CURRENT_ENVIRONMENT: &str =
    "Enabled on current operating system or architecture";

/// Reason reported when the test is skipped and no custom reason was given.
pub const DISABLED_ON_CURRENT_ENVIRONMENT: &str =
    "Disabled on current operating system and architecture";

/// Reason reported when no declaration is attached to the test.
pub const DECLARATION_NOT_PRESENT: &str = "@DisabledOnOs is not present";

/// Whether a test may run, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    enabled: bool,
    reason: String,
}

impl Decision {
    pub fn enabled(reason: impl Into<String>) -> Self {
        Self {
            enabled: true,
            reason: reason.into(),
        }
    }

    pub fn disabled(reason: impl Into<String>) -> Self {
        Self {
            enabled: false,
            reason: reason.into(),
        }
    }

    /// Skip decision preferring `custom` over `default` when it is not blank.
    pub fn disabled_with(default: &str, custom: Option<&str>) -> Self {
        let reason = custom
            .filter(|reason| !reason.trim().is_empty())
            .unwrap_or(default);
        Self::disabled(reason)
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn is_disabled(&self) -> bool {
        !self.enabled
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.enabled { "enabled" } else { "disabled" };
        write!(f, "{verdict}: {}", self.reason)
    }
}
