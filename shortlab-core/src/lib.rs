//! shortlab-core — short-only Bollinger/RSI strategy decision library.
//!
//! The heart of the crate is a single pure function, [`strategy::decide_trades`]:
//! given a bounded window of OHLCV candles and the current position lifecycle
//! state, it emits zero or one trade instruction per evaluation cycle, plus
//! the indicator readings it decided on (for display).
//!
//! - Entry (while flat): the latest high pokes above the upper Bollinger
//!   Band, the close finishes back below it, and RSI is under the configured
//!   threshold → open a short sized as a fraction of available cash, with
//!   stop-loss/take-profit bounds attached.
//! - Exit (while short): the latest close drops below the EMA → close all.
//!
//! Everything around that function — domain types, indicators, parameter
//! loading, candle loading — exists to feed it. Backtest execution, order
//! routing, pricing, and portfolio accounting are the calling engine's job.

pub mod data;
pub mod domain;
pub mod indicators;
pub mod strategy;
