//! Per-cycle indicator diagnostics.
//!
//! The decision function forwards the indicator readings it based its
//! decision on so callers can chart or log them. Diagnostics are display
//! material only; they are never part of the trading contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named indicator readings for one evaluation cycle.
///
/// Backed by a `BTreeMap` so serialized output is deterministically ordered.
/// Missing readings (indicator still warming up) are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleDiagnostics {
    readings: BTreeMap<String, f64>,
}

impl CycleDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading. NaN readings are dropped rather than stored.
    pub fn record(&mut self, name: impl Into<String>, value: f64) {
        if !value.is_nan() {
            self.readings.insert(name.into(), value);
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.readings.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.readings.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
