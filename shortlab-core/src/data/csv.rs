//! CSV candle loading.
//!
//! Expected columns: `timestamp,open,high,low,close,volume` with RFC 3339
//! timestamps. Rows must be strictly ascending in time; out-of-order or
//! insane candles are rejected rather than silently reordered, since a
//! shuffled window would corrupt every indicator computed from it.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::domain::Candle;

/// Errors from the candle loading layer.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open candle file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("candle at line {line} is out of order: {current} does not follow {previous}")]
    OutOfOrder {
        line: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },

    #[error("candle at line {line} ({timestamp}) failed the OHLC sanity check")]
    InsaneCandle {
        line: usize,
        timestamp: DateTime<Utc>,
    },

    #[error("candle file contains no rows")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct CandleRow {
    timestamp: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl From<CandleRow> for Candle {
    fn from(row: CandleRow) -> Self {
        Candle {
            timestamp: row.timestamp,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        }
    }
}

/// Load candles from a CSV file, oldest first.
pub fn load_candles(path: &Path) -> Result<Vec<Candle>, DataError> {
    let file = std::fs::File::open(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_candles(file)
}

/// Read candles from any CSV source, validating order and sanity.
pub fn read_candles<R: Read>(reader: R) -> Result<Vec<Candle>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut candles: Vec<Candle> = Vec::new();
    for (index, row) in csv_reader.deserialize::<CandleRow>().enumerate() {
        // 1-based file line: the header occupies line 1, record 0 is line 2.
        let line = index + 2;
        let candle: Candle = row?.into();

        if !candle.is_sane() {
            return Err(DataError::InsaneCandle {
                line,
                timestamp: candle.timestamp,
            });
        }
        if let Some(prev) = candles.last() {
            if candle.timestamp <= prev.timestamp {
                return Err(DataError::OutOfOrder {
                    line,
                    previous: prev.timestamp,
                    current: candle.timestamp,
                });
            }
        }
        candles.push(candle);
    }

    if candles.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(candles)
}
