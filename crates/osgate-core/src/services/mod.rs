//! Services that combine domain logic with ports.

mod condition;

pub use condition::DisabledOnOsCondition;
