//! Candle data access: CSV loading and lookback-window clipping.
//!
//! This layer deliberately stops at "hand the decision function a bounded
//! window". Downloading, caching, and universe construction belong to the
//! external engine that drives the strategy.

pub mod csv;
pub mod window;

pub use self::csv::{load_candles, read_candles, DataError};
pub use self::window::{clip_for_params, clip_window};
