//! Domain types for shortlab.

pub mod candle;
pub mod instruction;
pub mod pair;
pub mod position;

pub use candle::Candle;
pub use instruction::TradeInstruction;
pub use pair::TradingPair;
pub use position::{PositionStatus, TransitionError};
