//! Bounded lookback windows.
//!
//! The decision function only ever sees the most recent `candle_window`
//! candles. Clipping happens here rather than inside the decision function
//! so a caller holding long history pays the indicator cost only over the
//! window it configured.

use crate::domain::Candle;
use crate::strategy::StrategyParameters;

/// The most recent `window` candles of `history` (all of it when shorter).
pub fn clip_window(history: &[Candle], window: usize) -> &[Candle] {
    let start = history.len().saturating_sub(window);
    &history[start..]
}

/// Clip `history` to the window the parameters configure.
pub fn clip_for_params<'a>(history: &'a [Candle], params: &StrategyParameters) -> &'a [Candle] {
    clip_window(history, params.candle_window)
}
