//! Instruction-set architecture token.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name of an architecture that could not be determined.
pub const UNKNOWN_ARCHITECTURE: &str = "unknown";

/// Architecture of the running machine, e.g. `x86_64` or `aarch64`.
///
/// The token is kept verbatim; comparisons against declared names ignore
/// ASCII case. An unknown architecture matches no declared name, not even
/// a declared `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct Architecture(Option<String>);

impl Architecture {
    /// Wrap a token. Blank tokens yield [`Architecture::unknown`].
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            Self::unknown()
        } else {
            Self(Some(token))
        }
    }

    pub const fn unknown() -> Self {
        Self(None)
    }

    /// Architecture this binary was compiled for (`std::env::consts::ARCH`).
    pub fn current() -> Self {
        Self::new(std::env::consts::ARCH)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or(UNKNOWN_ARCHITECTURE)
    }

    /// Case-insensitive comparison with a declared architecture name.
    pub fn matches(&self, declared: &str) -> bool {
        self.0
            .as_deref()
            .is_some_and(|token| token.eq_ignore_ascii_case(declared))
    }

    pub const fn is_unknown(&self) -> bool {
        self.0.is_none()
    }
}

impl AsRef<str> for Architecture {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Architecture {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Architecture {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<Option<String>> for Architecture {
    fn from(token: Option<String>) -> Self {
        token.map_or_else(Self::unknown, Self::new)
    }
}

impl From<Architecture> for Option<String> {
    fn from(architecture: Architecture) -> Self {
        architecture.0
    }
}
