//! Execution condition for `@DisabledOnOs`-style declarations.
//!
//! Joins the (optional) declaration read from test metadata with an
//! environment probe and hands the pair to the gate.

use tracing::debug;

use crate::domain::{DECLARATION_NOT_PRESENT, Decision, DisabledOnOs};
use crate::error::GateResult;
use crate::gate;
use crate::ports::EnvironmentProbePort;

/// Decides whether a test runs given its declaration and a probe.
#[derive(Debug, Clone)]
pub struct DisabledOnOsCondition<P> {
    probe: P,
}

impl<P: EnvironmentProbePort> DisabledOnOsCondition<P> {
    pub const fn new(probe: P) -> Self {
        Self { probe }
    }

    pub const fn probe(&self) -> &P {
        &self.probe
    }

    /// Evaluate the declaration attached to a test, if any.
    ///
    /// Tests without a declaration are always enabled and the probe is not
    /// consulted. A declaration naming neither an OS nor an architecture is a
    /// configuration error.
    pub fn evaluate(&self, declaration: Option<&DisabledOnOs>) -> GateResult<Decision> {
        let Some(declaration) = declaration else {
            debug!("No @DisabledOnOs declaration; test enabled");
            return Ok(Decision::enabled(DECLARATION_NOT_PRESENT));
        };

        gate::validate(declaration)?;
        let environment = self.probe.snapshot();
        Ok(gate::decide_for(declaration, &environment))
    }
}
