//! Operating system identity.
//!
//! The set of operating systems a declaration can name is closed. Values are
//! compared by identity, never by their textual form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operating systems known to the gate.
///
/// `Other` covers every environment that does not classify as one of the
/// named variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Aix,
    FreeBsd,
    Linux,
    Mac,
    OpenBsd,
    Solaris,
    Windows,
    Other,
}

/// Error returned when a string does not name a known operating system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operating system: {0:?}")]
pub struct ParseOsError(pub String);

impl OperatingSystem {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Aix,
        Self::FreeBsd,
        Self::Linux,
        Self::Mac,
        Self::OpenBsd,
        Self::Solaris,
        Self::Windows,
        Self::Other,
    ];

    /// Canonical lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aix => "aix",
            Self::FreeBsd => "freebsd",
            Self::Linux => "linux",
            Self::Mac => "mac",
            Self::OpenBsd => "openbsd",
            Self::Solaris => "solaris",
            Self::Windows => "windows",
            Self::Other => "other",
        }
    }

    /// Classify a human-readable OS name such as `"Mac OS X"` or `"Windows 11"`.
    ///
    /// Matching is a lower-cased substring search; order matters because
    /// `"darwin"` contains `"win"`. Blank or unrecognised names map to
    /// [`OperatingSystem::Other`].
    pub fn from_os_name(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Self::Other;
        }

        if name.contains("aix") {
            Self::Aix
        } else if name.contains("freebsd") {
            Self::FreeBsd
        } else if name.contains("linux") {
            Self::Linux
        } else if name.contains("mac") || name.contains("darwin") {
            Self::Mac
        } else if name.contains("openbsd") {
            Self::OpenBsd
        } else if name.contains("sunos") || name.contains("solaris") {
            Self::Solaris
        } else if name.contains("win") {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// Map a Rust target OS (`std::env::consts::OS`) to an identity.
    pub fn from_target_os(os: &str) -> Self {
        match os {
            "linux" | "android" => Self::Linux,
            "macos" | "ios" => Self::Mac,
            "windows" => Self::Windows,
            "freebsd" => Self::FreeBsd,
            "openbsd" => Self::OpenBsd,
            "solaris" | "illumos" => Self::Solaris,
            "aix" => Self::Aix,
            _ => Self::Other,
        }
    }

    /// The operating system this process is running on.
    pub fn current() -> Self {
        Self::from_target_os(std::env::consts::OS)
    }

    /// Whether this identity is the one of the running environment.
    pub fn is_current_os(self) -> bool {
        self == Self::current()
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingSystem {
    type Err = ParseOsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "aix" => Ok(Self::Aix),
            "freebsd" => Ok(Self::FreeBsd),
            "linux" => Ok(Self::Linux),
            "mac" | "macos" | "darwin" => Ok(Self::Mac),
            "openbsd" => Ok(Self::OpenBsd),
            "solaris" | "sunos" => Ok(Self::Solaris),
            "windows" => Ok(Self::Windows),
            "other" => Ok(Self::Other),
            _ => Err(ParseOsError(s.to_string())),
        }
    }
}
