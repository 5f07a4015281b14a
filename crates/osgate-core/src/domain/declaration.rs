//! Constraint declaration attached to a test definition.

use serde::{Deserialize, Serialize};

use super::os::OperatingSystem;

/// Operating systems and/or architectures on which a test must not run.
///
/// Either list may be empty, but not both; that precondition is checked by
/// the gate, not here, so a metadata reader can always produce a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisabledOnOs {
    /// Excluded operating systems.
    pub operating_systems: Vec<OperatingSystem>,

    /// Excluded architecture names, matched case-insensitively.
    pub architectures: Vec<String>,

    /// Reason reported instead of the default when the test is skipped.
    pub disabled_reason: Option<String>,
}

impl DisabledOnOs {
    /// Declaration excluding the given operating systems.
    pub fn on(operating_systems: impl IntoIterator<Item = OperatingSystem>) -> Self {
        Self {
            operating_systems: operating_systems.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Declaration excluding the given architectures.
    pub fn on_architectures<S: Into<String>>(architectures: impl IntoIterator<Item = S>) -> Self {
        Self::default().with_architectures(architectures)
    }

    #[must_use]
    pub fn with_architectures<S: Into<String>>(
        mut self,
        architectures: impl IntoIterator<Item = S>,
    ) -> Self {
        self.architectures = architectures.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_disabled_reason(mut self, reason: impl Into<String>) -> Self {
        self.disabled_reason = Some(reason.into());
        self
    }

    /// The custom skip reason, if one was given.
    ///
    /// Blank reasons are passed through; [`Decision::disabled_with`] ignores them.
    ///
    /// [`Decision::disabled_with`]: crate::domain::Decision::disabled_with
    pub fn custom_reason(&self) -> Option<&str> {
        self.disabled_reason.as_deref()
    }

    /// True when neither an OS nor an architecture is declared.
    pub fn is_empty(&self) -> bool {
        self.operating_systems.is_empty() && self.architectures.is_empty()
    }
}
