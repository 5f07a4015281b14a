//! Runtime adapters for osgate.
//!
//! Provides [`DefaultEnvironmentProbe`], the implementation of
//! `EnvironmentProbePort` used outside of tests.
#![deny(unused_crate_dependencies)]

pub mod probe;

#[cfg(test)]
mod test_utils;

use osgate_core::DisabledOnOsCondition;

pub use probe::{
    ARCH_ENV_VAR, DefaultEnvironmentProbe, OS_ENV_VAR, ProbeSettings, ValueSource,
};

/// Condition bound to the environment of the running process.
///
/// The environment is probed once, here; every evaluation reuses it.
pub fn current_condition() -> DisabledOnOsCondition<DefaultEnvironmentProbe> {
    DisabledOnOsCondition::new(DefaultEnvironmentProbe::new())
}

#[cfg(test)]
mod tests {
    use osgate_core::{DisabledOnOs, OperatingSystem};

    use super::*;
    use crate::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn test_current_condition_skips_current_environment() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _os = EnvVarGuard::set(OS_ENV_VAR, "Linux");
        let _arch = EnvVarGuard::set(ARCH_ENV_VAR, "aarch64");

        let condition = current_condition();
        let decl = DisabledOnOs::on([OperatingSystem::Linux])
            .with_architectures(["AArch64"])
            .with_disabled_reason("emulated runner");
        let decision = condition.evaluate(Some(&decl)).unwrap();
        assert!(decision.is_disabled());
        assert_eq!(decision.reason(), "emulated runner");

        let decl = DisabledOnOs::on([OperatingSystem::Linux]).with_architectures(["x86_64"]);
        assert!(condition.evaluate(Some(&decl)).unwrap().is_enabled());
    }

    #[test]
    fn test_current_condition_never_skips_other_os() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _os = EnvVarGuard::remove(OS_ENV_VAR);
        let _arch = EnvVarGuard::remove(ARCH_ENV_VAR);

        let other = OperatingSystem::ALL
            .into_iter()
            .find(|os| !os.is_current_os())
            .unwrap();
        let decision = current_condition()
            .evaluate(Some(&DisabledOnOs::on([other])))
            .unwrap();
        assert!(decision.is_enabled());
    }
}
