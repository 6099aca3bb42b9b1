//! Trading pair identifier — names what the strategy trades.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a trading pair on a venue.
///
/// The strategy only ever trades one pair per run, configured up front.
/// Symbols are plain tickers (e.g. "WBNB", "BUSD"); the venue slug names
/// the exchange the pair is quoted on (e.g. "pancakeswap-v2").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingPair {
    pub base: String,
    pub quote: String,
    pub venue: String,
}

impl TradingPair {
    pub fn new(base: impl Into<String>, quote: impl Into<String>, venue: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
            venue: venue.into(),
        }
    }

    /// Human-readable pair description, e.g. "WBNB-BUSD".
    pub fn description(&self) -> String {
        format!("{}-{}", self.base, self.quote)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}@{}", self.base, self.quote, self.venue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_display() {
        let pair = TradingPair::new("WBNB", "BUSD", "pancakeswap-v2");
        assert_eq!(pair.description(), "WBNB-BUSD");
        assert_eq!(pair.to_string(), "WBNB-BUSD@pancakeswap-v2");
    }

    #[test]
    fn pair_serialization_roundtrip() {
        let pair = TradingPair::new("ETH", "USDC", "uniswap-v3");
        let json = serde_json::to_string(&pair).unwrap();
        let deser: TradingPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deser);
    }
}
