//! The environment gate.
//!
//! A declaration lists excluded operating systems and excluded architectures.
//! Each axis is evaluated on its own:
//!
//! - an undeclared axis does not permit anything (`false`)
//! - a declared axis permits the run when the current value is not listed
//!
//! The test runs if either axis permits it. A skip therefore requires every
//! declared axis to match the current environment, and a declaration that
//! names only one axis reduces to a plain match on that axis.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    Architecture, DISABLED_ON_CURRENT_ENVIRONMENT, Decision, DisabledOnOs,
    ENABLED_ON_CURRENT_ENVIRONMENT, OperatingSystem,
};
use crate::error::{GateError, GateResult};

/// Snapshot of the environment a decision is made against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Environment {
    pub os: OperatingSystem,
    pub architecture: Architecture,
}

impl Environment {
    pub fn new(os: OperatingSystem, architecture: impl Into<Architecture>) -> Self {
        Self {
            os,
            architecture: architecture.into(),
        }
    }
}

/// Reject declarations that name neither an OS nor an architecture.
pub fn validate(declaration: &DisabledOnOs) -> GateResult<()> {
    if declaration.is_empty() {
        return Err(GateError::empty_declaration());
    }
    Ok(())
}

/// Whether the OS axis permits the run.
///
/// `false` when nothing is declared; otherwise `true` iff `current` is not
/// among the excluded systems.
pub fn os_axis_permits(operating_systems: &[OperatingSystem], current: OperatingSystem) -> bool {
    if operating_systems.is_empty() {
        return false;
    }
    !operating_systems.contains(&current)
}

/// Whether the architecture axis permits the run.
///
/// `false` when nothing is declared; otherwise `true` iff no declared name
/// equals `current`, ignoring case.
pub fn arch_axis_permits<S: AsRef<str>>(architectures: &[S], current: &Architecture) -> bool {
    if architectures.is_empty() {
        return false;
    }
    !architectures
        .iter()
        .any(|declared| current.matches(declared.as_ref()))
}

/// Evaluate raw constraint lists against the given environment values.
pub fn evaluate_lists<S: AsRef<str>>(
    operating_systems: &[OperatingSystem],
    architectures: &[S],
    current_os: OperatingSystem,
    current_architecture: &Architecture,
    custom_reason: Option<&str>,
) -> GateResult<Decision> {
    if operating_systems.is_empty() && architectures.is_empty() {
        return Err(GateError::empty_declaration());
    }

    Ok(decide(
        operating_systems,
        architectures,
        current_os,
        current_architecture,
        custom_reason,
    ))
}

/// Evaluate a declaration against an environment snapshot.
pub fn evaluate(declaration: &DisabledOnOs, environment: &Environment) -> GateResult<Decision> {
    validate(declaration)?;
    Ok(decide_for(declaration, environment))
}

/// Decision for a declaration already known to be non-empty.
pub(crate) fn decide_for(declaration: &DisabledOnOs, environment: &Environment) -> Decision {
    decide(
        &declaration.operating_systems,
        &declaration.architectures,
        environment.os,
        &environment.architecture,
        declaration.custom_reason(),
    )
}

fn decide<S: AsRef<str>>(
    operating_systems: &[OperatingSystem],
    architectures: &[S],
    current_os: OperatingSystem,
    current_architecture: &Architecture,
    custom_reason: Option<&str>,
) -> Decision {
    let os_permits = os_axis_permits(operating_systems, current_os);
    let arch_permits = arch_axis_permits(architectures, current_architecture);

    let decision = if os_permits || arch_permits {
        Decision::enabled(ENABLED_ON_CURRENT_ENVIRONMENT)
    } else {
        Decision::disabled_with(DISABLED_ON_CURRENT_ENVIRONMENT, custom_reason)
    };

    debug!(
        os = %current_os,
        architecture = %current_architecture,
        os_permits,
        arch_permits,
        enabled = decision.is_enabled(),
        "Evaluated environment gate"
    );

    decision
}

/// Stateless handle around [`evaluate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentGate;

impl EnvironmentGate {
    pub const fn new() -> Self {
        Self
    }

    pub fn evaluate(
        self,
        declaration: &DisabledOnOs,
        environment: &Environment,
    ) -> GateResult<Decision> {
        evaluate(declaration, environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux_aarch64() -> Environment {
        Environment::new(OperatingSystem::Linux, "aarch64")
    }

    const NO_ARCHS: [&str; 0] = [];

    #[test]
    fn test_os_axis_empty_never_permits() {
        assert!(!os_axis_permits(&[], OperatingSystem::Linux));
    }

    #[test]
    fn test_os_axis_permits_when_not_listed() {
        assert!(os_axis_permits(&[OperatingSystem::Windows], OperatingSystem::Linux));
        assert!(!os_axis_permits(
            &[OperatingSystem::Windows, OperatingSystem::Linux],
            OperatingSystem::Linux
        ));
    }

    #[test]
    fn test_arch_axis_empty_never_permits() {
        assert!(!arch_axis_permits(&NO_ARCHS, &Architecture::new("x86_64")));
    }

    #[test]
    fn test_arch_axis_case_insensitive() {
        let current = Architecture::new("x86_64");
        assert!(!arch_axis_permits(&["X86_64"], &current));
        assert!(arch_axis_permits(&["aarch64", "riscv64"], &current));
    }

    #[test]
    fn test_unknown_architecture_permits() {
        assert!(arch_axis_permits(&["x86_64"], &Architecture::unknown()));
    }

    #[test]
    fn test_unknown_current_architecture_never_skips() {
        let env = Environment::new(OperatingSystem::Linux, "");
        let decision = evaluate(&DisabledOnOs::on_architectures(["unknown"]), &env).unwrap();
        assert!(decision.is_enabled());

        let decl = DisabledOnOs::on([OperatingSystem::Linux]).with_architectures(["UNKNOWN"]);
        assert!(evaluate(&decl, &env).unwrap().is_enabled());
    }

    #[test]
    fn test_blank_custom_reason_falls_back() {
        let decl = DisabledOnOs::on([OperatingSystem::Linux]).with_disabled_reason("  ");
        let decision = evaluate(&decl, &linux_aarch64()).unwrap();
        assert!(decision.is_disabled());
        assert_eq!(decision.reason(), DISABLED_ON_CURRENT_ENVIRONMENT);
    }

    #[test]
    fn test_empty_declaration_is_configuration_error() {
        let err = evaluate(&DisabledOnOs::default(), &linux_aarch64()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_declaration_ignores_reason() {
        let decl = DisabledOnOs::default().with_disabled_reason("never used");
        assert!(evaluate(&decl, &linux_aarch64()).is_err());
    }

    #[test]
    fn test_os_only_skip_uses_custom_reason() {
        let decl = DisabledOnOs::on([OperatingSystem::Linux]).with_disabled_reason("no epoll");
        let decision = evaluate(&decl, &linux_aarch64()).unwrap();
        assert!(decision.is_disabled());
        assert_eq!(decision.reason(), "no epoll");
    }

    #[test]
    fn test_enabled_reason_ignores_custom_reason() {
        let decl = DisabledOnOs::on([OperatingSystem::Windows]).with_disabled_reason("no epoll");
        let decision = evaluate(&decl, &linux_aarch64()).unwrap();
        assert!(decision.is_enabled());
        assert_eq!(decision.reason(), ENABLED_ON_CURRENT_ENVIRONMENT);
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let decl = DisabledOnOs::on([OperatingSystem::Linux, OperatingSystem::Linux])
            .with_architectures(["aarch64", "AARCH64"]);
        assert!(evaluate(&decl, &linux_aarch64()).unwrap().is_disabled());
    }

    #[test]
    fn test_gate_handle_matches_free_function() {
        let decl = DisabledOnOs::on_architectures(["aarch64"]);
        let env = linux_aarch64();
        assert_eq!(
            EnvironmentGate::new().evaluate(&decl, &env),
            evaluate(&decl, &env)
        );
    }

    #[test]
    fn test_evaluate_lists_accepts_owned_strings() {
        let archs = vec!["aarch64".to_string()];
        let decision = evaluate_lists(
            &[OperatingSystem::Linux],
            &archs,
            OperatingSystem::Linux,
            &Architecture::new("AArch64"),
            None,
        )
        .unwrap();
        assert_eq!(decision.reason(), DISABLED_ON_CURRENT_ENVIRONMENT);
    }
}
