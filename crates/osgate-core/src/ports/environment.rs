//! Environment probe port.
//!
//! Core owns the trait; adapters (e.g. osgate-runtime) own the inspection of
//! the running process. Both queries are infallible: a probe that cannot tell
//! the architecture reports [`Architecture::unknown`], which never matches a
//! declaration.

use crate::domain::{Architecture, OperatingSystem};
use crate::gate::Environment;

/// Port for reading the identity of the running environment.
///
/// # Example
///
/// ```ignore
/// use osgate_core::ports::EnvironmentProbePort;
///
/// fn describe(probe: &dyn EnvironmentProbePort) -> String {
///     format!("{} ({})", probe.current_os(), probe.current_architecture())
/// }
/// ```
pub trait EnvironmentProbePort: Send + Sync {
    /// Operating system of the running environment.
    fn current_os(&self) -> OperatingSystem;

    /// Architecture of the running environment.
    fn current_architecture(&self) -> Architecture;

    /// Read both values into one snapshot.
    fn snapshot(&self) -> Environment {
        Environment {
            os: self.current_os(),
            architecture: self.current_architecture(),
        }
    }
}

/// A fixed environment is its own probe.
impl EnvironmentProbePort for Environment {
    fn current_os(&self) -> OperatingSystem {
        self.os
    }

    fn current_architecture(&self) -> Architecture {
        self.architecture.clone()
    }
}
