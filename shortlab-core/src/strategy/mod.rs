//! Strategy layer: parameters, the decision function, and its diagnostics.

pub mod decide;
pub mod diagnostics;
pub mod parameters;

pub use decide::{decide_trades, Decision, DecisionCycle};
pub use diagnostics::CycleDiagnostics;
pub use parameters::{ParameterError, StrategyParameters};
