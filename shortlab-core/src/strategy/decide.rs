//! The decision function — one evaluation cycle, at most one instruction.
//!
//! Entry (only while no position is open): the latest high pokes above the
//! upper Bollinger Band, the latest close is back below it, and RSI sits
//! below the configured threshold. The short is sized as a fraction of
//! available cash and carries stop-loss/take-profit bounds.
//!
//! Exit (only while a position is open): the latest close drops below the
//! EMA.
//!
//! Pure and deterministic: candle window in, zero or one instruction out,
//! indicator readings forwarded for display. The only defined edge condition
//! is insufficient history for the EMA, which yields no instruction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Candle, PositionStatus, TradeInstruction};
use crate::indicators::{Bollinger, Ema, Indicator, Rsi};

use super::diagnostics::CycleDiagnostics;
use super::parameters::StrategyParameters;

/// Inputs for one evaluation cycle, supplied by the calling engine.
#[derive(Debug, Clone)]
pub struct DecisionCycle<'a> {
    /// Timestamp of the cycle being evaluated.
    pub timestamp: DateTime<Utc>,
    /// Bounded lookback window of candles, oldest first.
    pub candles: &'a [Candle],
    /// Position lifecycle state, owned and mutated by the caller.
    pub position: PositionStatus,
    /// Cash available for new positions, in the quote currency.
    pub cash: f64,
}

/// Outcome of one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub timestamp: DateTime<Utc>,
    /// Zero or one trade instruction.
    pub instructions: Vec<TradeInstruction>,
    /// Indicator readings for display; not part of the trading contract.
    pub diagnostics: CycleDiagnostics,
}

impl Decision {
    fn no_trade(timestamp: DateTime<Utc>, diagnostics: CycleDiagnostics) -> Self {
        Self {
            timestamp,
            instructions: Vec::new(),
            diagnostics,
        }
    }
}

/// Evaluate one decision cycle.
///
/// The candle window is whatever history the caller could supply, which may
/// be shorter than the indicators need (warmup), in which case no
/// instruction is emitted.
///
/// # Panics
/// Panics if `params` fails [`StrategyParameters::validate`]. Parameters
/// built through `from_toml_str`/`from_toml_file` are always valid; callers
/// assembling the struct by hand must validate first.
pub fn decide_trades(params: &StrategyParameters, cycle: &DecisionCycle<'_>) -> Decision {
    if let Err(err) = params.validate() {
        panic!("invalid strategy parameters: {err}");
    }

    let candles = cycle.candles;

    let ema = Ema::new(params.ema_length);
    let rsi = Rsi::new(params.rsi_length);
    let bb_upper = Bollinger::upper(params.bollinger_length, params.bollinger_multiplier);
    let bb_lower = Bollinger::lower(params.bollinger_length, params.bollinger_multiplier);

    let ema_now = ema.latest(candles);
    let rsi_now = rsi.latest(candles);
    let bb_upper_now = bb_upper.latest(candles);
    let bb_lower_now = bb_lower.latest(candles);

    let mut diagnostics = CycleDiagnostics::new();
    if let Some(v) = ema_now {
        diagnostics.record("ema", v);
    }
    if let Some(v) = rsi_now {
        diagnostics.record("rsi", v);
    }
    if let Some(v) = bb_upper_now {
        diagnostics.record("bollinger_upper", v);
    }
    if let Some(v) = bb_lower_now {
        diagnostics.record("bollinger_lower", v);
    }

    // Not enough history for the moving average: no trade this cycle.
    let Some(ema_now) = ema_now else {
        return Decision::no_trade(cycle.timestamp, diagnostics);
    };
    let Some(latest) = candles.last() else {
        return Decision::no_trade(cycle.timestamp, diagnostics);
    };
    if latest.is_void() {
        return Decision::no_trade(cycle.timestamp, diagnostics);
    }

    let mut instructions = Vec::new();

    if cycle.position.is_open() {
        // Exit: close below the EMA ends the short.
        if latest.close < ema_now {
            instructions.push(TradeInstruction::CloseAll);
        }
    } else if let (Some(bb_upper_now), Some(rsi_now)) = (bb_upper_now, rsi_now) {
        // Entry: wick above the upper band, close back inside, RSI subdued.
        let poked_above = latest.high > bb_upper_now;
        let closed_inside = latest.close < bb_upper_now;
        let rsi_subdued = rsi_now < params.rsi_entry_threshold;

        if poked_above && closed_inside && rsi_subdued {
            instructions.push(TradeInstruction::OpenShort {
                size_usd: cycle.cash * params.position_size,
                stop_loss_pct: params.stop_loss_pct,
                take_profit_pct: params.take_profit_pct,
            });
        }
    }

    debug_assert!(instructions.len() <= 1);
    Decision {
        timestamp: cycle.timestamp,
        instructions,
        diagnostics,
    }
}
