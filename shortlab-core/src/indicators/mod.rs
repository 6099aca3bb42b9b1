//! Concrete indicator implementations.
//!
//! All indicators implement the `Indicator` trait: candle history in,
//! numeric series out, with a NaN prefix during warmup. The decision
//! function recomputes them each evaluation cycle over its bounded window;
//! there is no incremental state to carry between cycles.

pub mod bollinger;
pub mod ema;
pub mod rsi;

pub use bollinger::{Bollinger, BollingerBand};
pub use ema::Ema;
pub use rsi::Rsi;

use crate::domain::Candle;

/// Trait for indicators.
///
/// Indicators take a full candle series and produce a numeric output series
/// of the same length. The first `lookback()` values are `f64::NAN` (warmup).
///
/// # Look-ahead contamination guard
/// No indicator value at candle t may depend on price data from candle t+1
/// or later.
pub trait Indicator {
    /// Human-readable name (e.g., "ema_21", "rsi_14").
    fn name(&self) -> &str;

    /// Number of candles needed before the indicator produces valid output.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire candle series.
    ///
    /// Returns a `Vec<f64>` of the same length as `candles`.
    fn compute(&self, candles: &[Candle]) -> Vec<f64>;

    /// The most recent indicator value, if the series is long enough
    /// and the value is not NaN.
    fn latest(&self, candles: &[Candle]) -> Option<f64> {
        let series = self.compute(candles);
        match series.last() {
            Some(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }
}

/// Create synthetic candles from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for first candle),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_candles(closes: &[f64]) -> Vec<Candle> {
    use chrono::TimeZone;
    let base = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            Candle {
                timestamp: base + chrono::Duration::hours(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
