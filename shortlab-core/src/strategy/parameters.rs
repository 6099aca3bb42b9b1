//! Strategy parameters — immutable configuration fixed at the start of a run.
//!
//! Parameters are loaded from TOML, validated once, and never mutated.
//! A deterministic BLAKE3 fingerprint over the canonical serialized form
//! identifies a parameter set for reproducibility and audit.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::domain::TradingPair;

/// Errors from parameter loading and validation.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("failed to read parameter file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse parameter TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be >= 1")]
    ZeroLength { field: &'static str },

    #[error("rsi_entry_threshold must be in (0, 100), got {0}")]
    RsiThresholdOutOfRange(f64),

    #[error("bollinger_multiplier must be positive and finite, got {0}")]
    BollingerMultiplierInvalid(f64),

    #[error("position_size must be in (0, 1], got {0}")]
    PositionSizeOutOfRange(f64),

    #[error("{field} must be a positive finite fraction, got {value}")]
    InvalidFraction { field: &'static str, value: f64 },

    #[error("candle_window {window} is smaller than the {requirement} candles the indicators need")]
    WindowTooSmall { window: usize, requirement: usize },
}

/// Complete parameter set for one strategy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyParameters {
    /// The pair the strategy trades.
    pub pair: TradingPair,

    /// Lookback window size: how many of the most recent candles each
    /// decision cycle receives.
    pub candle_window: usize,

    /// EMA length for the exit rule.
    pub ema_length: usize,

    /// RSI length for the entry filter.
    pub rsi_length: usize,

    /// Shorts are only entered while RSI is below this level (0-100).
    pub rsi_entry_threshold: f64,

    /// Bollinger Band length.
    pub bollinger_length: usize,

    /// Bollinger Band width in standard deviations.
    pub bollinger_multiplier: f64,

    /// Fraction of available cash committed per position, in (0, 1].
    pub position_size: f64,

    /// Stop-loss distance as a fraction of entry price.
    pub stop_loss_pct: f64,

    /// Take-profit distance as a fraction of entry price.
    pub take_profit_pct: f64,
}

impl StrategyParameters {
    /// Load and validate parameters from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ParameterError> {
        let content = std::fs::read_to_string(path).map_err(|source| ParameterError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate parameters from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ParameterError> {
        let params: Self = toml::from_str(content)?;
        params.validate()?;
        Ok(params)
    }

    /// Validate the parameter set.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.ema_length == 0 {
            return Err(ParameterError::ZeroLength { field: "ema_length" });
        }
        if self.rsi_length == 0 {
            return Err(ParameterError::ZeroLength { field: "rsi_length" });
        }
        if self.bollinger_length == 0 {
            return Err(ParameterError::ZeroLength {
                field: "bollinger_length",
            });
        }
        if !(self.rsi_entry_threshold > 0.0 && self.rsi_entry_threshold < 100.0) {
            return Err(ParameterError::RsiThresholdOutOfRange(
                self.rsi_entry_threshold,
            ));
        }
        if !(self.bollinger_multiplier > 0.0 && self.bollinger_multiplier.is_finite()) {
            return Err(ParameterError::BollingerMultiplierInvalid(
                self.bollinger_multiplier,
            ));
        }
        if !(self.position_size > 0.0 && self.position_size <= 1.0) {
            return Err(ParameterError::PositionSizeOutOfRange(self.position_size));
        }
        for (field, value) in [
            ("stop_loss_pct", self.stop_loss_pct),
            ("take_profit_pct", self.take_profit_pct),
        ] {
            if !(value > 0.0 && value < 1.0 && value.is_finite()) {
                return Err(ParameterError::InvalidFraction { field, value });
            }
        }
        let requirement = self.required_candles();
        if self.candle_window < requirement {
            return Err(ParameterError::WindowTooSmall {
                window: self.candle_window,
                requirement,
            });
        }
        Ok(())
    }

    /// Minimum history the indicators need to produce a full reading.
    ///
    /// RSI needs one candle beyond its length for the first price change.
    pub fn required_candles(&self) -> usize {
        self.ema_length
            .max(self.rsi_length + 1)
            .max(self.bollinger_length)
    }

    /// Deterministic BLAKE3 fingerprint of this parameter set.
    ///
    /// Two runs with identical parameters share a fingerprint, which makes
    /// decision logs attributable to an exact configuration.
    pub fn fingerprint(&self) -> String {
        let json =
            serde_json::to_string(self).expect("StrategyParameters serialization cannot fail");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
