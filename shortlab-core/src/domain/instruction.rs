//! Trade instructions — the decision function's only output.
//!
//! Instructions describe what the external execution engine should do this
//! cycle. They carry no execution detail (routing, pricing, fills); those
//! belong to the engine that consumes them.

use serde::{Deserialize, Serialize};

/// A single trading instruction emitted by the decision function.
///
/// At most one instruction is emitted per evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeInstruction {
    /// Open a new short position.
    OpenShort {
        /// Position notional in the quote currency.
        size_usd: f64,
        /// Stop-loss distance as a fraction of entry (e.g. 0.02 for 2%).
        stop_loss_pct: f64,
        /// Take-profit distance as a fraction of entry.
        take_profit_pct: f64,
    },
    /// Close the entire open position.
    CloseAll,
}

impl TradeInstruction {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::OpenShort { .. })
    }

    pub fn is_close(&self) -> bool {
        matches!(self, Self::CloseAll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_short_serialization_roundtrip() {
        let instr = TradeInstruction::OpenShort {
            size_usd: 5000.0,
            stop_loss_pct: 0.02,
            take_profit_pct: 0.04,
        };
        let json = serde_json::to_string(&instr).unwrap();
        assert!(json.contains("\"kind\":\"open_short\""));
        let deser: TradeInstruction = serde_json::from_str(&json).unwrap();
        assert_eq!(instr, deser);
        assert!(instr.is_open());
        assert!(!instr.is_close());
    }

    #[test]
    fn close_all_serialization_roundtrip() {
        let instr = TradeInstruction::CloseAll;
        let json = serde_json::to_string(&instr).unwrap();
        let deser: TradeInstruction = serde_json::from_str(&json).unwrap();
        assert_eq!(instr, deser);
        assert!(instr.is_close());
    }
}
