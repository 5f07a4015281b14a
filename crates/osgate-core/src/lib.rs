//! Environment-aware gating for tests.
//!
//! Given the operating systems and architectures a test is disabled on, decide
//! whether it runs on the current machine. The crate is pure: the running
//! environment is supplied through [`ports::EnvironmentProbePort`] or as a
//! plain [`gate::Environment`] value.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod gate;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Architecture, DECLARATION_NOT_PRESENT, DISABLED_ON_CURRENT_ENVIRONMENT, Decision,
    DisabledOnOs, ENABLED_ON_CURRENT_ENVIRONMENT, OperatingSystem, ParseOsError,
    UNKNOWN_ARCHITECTURE,
};
pub use error::{EMPTY_DECLARATION_MESSAGE, GateError, GateResult};
pub use gate::{
    Environment, EnvironmentGate, arch_axis_permits, evaluate, evaluate_lists, os_axis_permits,
    validate,
};
pub use ports::EnvironmentProbePort;
pub use services::DisabledOnOsCondition;
