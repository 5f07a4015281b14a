//! Environment probe for the running process.
//!
//! Detection uses the compile target (`std::env::consts`). Either value can be
//! overridden, which lets a CI job gate tests for a machine it emulates.
//!
//! Resolution order per value:
//! 1. Explicit setting passed by the caller (highest priority)
//! 2. `OSGATE_OS` / `OSGATE_ARCH` environment variable
//! 3. Detected value
//!
//! Values are resolved once, when the probe is built.

use std::env;

use osgate_core::ports::EnvironmentProbePort;
use osgate_core::{Architecture, Environment, OperatingSystem};
use tracing::debug;

/// Environment variable overriding the detected operating system.
pub const OS_ENV_VAR: &str = "OSGATE_OS";

/// Environment variable overriding the detected architecture.
pub const ARCH_ENV_VAR: &str = "OSGATE_ARCH";

/// Where a probed value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Explicit,
    EnvVar,
    Detected,
}

/// Overrides applied on top of detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeSettings {
    /// OS name, classified with [`OperatingSystem::from_os_name`].
    pub os_override: Option<String>,

    /// Architecture token, used verbatim.
    pub arch_override: Option<String>,
}

impl ProbeSettings {
    /// Read overrides from `OSGATE_OS` and `OSGATE_ARCH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read overrides through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            os_override: lookup(OS_ENV_VAR),
            arch_override: lookup(ARCH_ENV_VAR),
        }
    }
}

/// Probe whose values are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultEnvironmentProbe {
    environment: Environment,
    os_source: ValueSource,
    arch_source: ValueSource,
}

impl DefaultEnvironmentProbe {
    /// Detect the environment, honouring `OSGATE_OS` and `OSGATE_ARCH`.
    pub fn new() -> Self {
        Self::with_settings(&ProbeSettings::default(), &ProbeSettings::from_env())
    }

    /// Detect the environment using only the compile target.
    pub fn detected() -> Self {
        Self::with_settings(&ProbeSettings::default(), &ProbeSettings::default())
    }

    /// Resolve each value from `explicit`, then `from_env`, then detection.
    pub fn with_settings(explicit: &ProbeSettings, from_env: &ProbeSettings) -> Self {
        let (os, os_source) = resolve(
            explicit.os_override.as_deref(),
            from_env.os_override.as_deref(),
        )
        .map_or_else(
            || (OperatingSystem::current(), ValueSource::Detected),
            |(name, source)| (OperatingSystem::from_os_name(name), source),
        );

        let (architecture, arch_source) = resolve(
            explicit.arch_override.as_deref(),
            from_env.arch_override.as_deref(),
        )
        .map_or_else(
            || (Architecture::current(), ValueSource::Detected),
            |(token, source)| (Architecture::new(token.trim()), source),
        );

        if os_source != ValueSource::Detected {
            debug!(os = %os, source = ?os_source, "Operating system overridden");
        }
        if arch_source != ValueSource::Detected {
            debug!(architecture = %architecture, source = ?arch_source, "Architecture overridden");
        }

        Self {
            environment: Environment { os, architecture },
            os_source,
            arch_source,
        }
    }

    pub const fn os_source(&self) -> ValueSource {
        self.os_source
    }

    pub const fn arch_source(&self) -> ValueSource {
        self.arch_source
    }
}

impl Default for DefaultEnvironmentProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProbePort for DefaultEnvironmentProbe {
    fn current_os(&self) -> OperatingSystem {
        self.environment.os
    }

    fn current_architecture(&self) -> Architecture {
        self.environment.architecture.clone()
    }
}

/// First non-blank value, tagged with where it came from.
fn resolve<'a>(
    explicit: Option<&'a str>,
    from_env: Option<&'a str>,
) -> Option<(&'a str, ValueSource)> {
    let non_blank = |value: &&str| !value.trim().is_empty();

    explicit
        .filter(non_blank)
        .map(|value| (value, ValueSource::Explicit))
        .or_else(|| {
            from_env
                .filter(non_blank)
                .map(|value| (value, ValueSource::EnvVar))
        })
}
