//! Domain types for environment gating.
//!
//! Pure value types with no infrastructure dependencies.

mod arch;
mod decision;
mod declaration;
mod os;

pub use arch::{Architecture, UNKNOWN_ARCHITECTURE};
pub use decision::{
    DECLARATION_NOT_PRESENT, DISABLED_ON_CURRENT_ENVIRONMENT, Decision,
    ENABLED_ON_CURRENT_ENVIRONMENT,
};
pub use declaration::DisabledOnOs;
pub use os::{OperatingSystem, ParseOsError};
