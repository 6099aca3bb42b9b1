//! Position lifecycle — the caller-owned three-state machine.
//!
//! The external execution engine owns position state; the decision function
//! only reads whether a position is currently open. The lifecycle is
//! Flat → ShortOpen → Closed, with Closed permitting re-entry (a subsequent
//! open starts a new lifecycle).

use serde::{Deserialize, Serialize};

use super::TradeInstruction;

/// Current state of the (single) tracked position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionStatus {
    /// No position has been opened yet.
    Flat,
    /// A short position is currently open.
    ShortOpen,
    /// The last position was closed; a new one may be opened.
    Closed,
}

impl PositionStatus {
    /// True when a short position is currently open.
    pub fn is_open(self) -> bool {
        matches!(self, Self::ShortOpen)
    }

    /// Advance the lifecycle by applying an emitted instruction.
    ///
    /// Invalid transitions (opening while open, closing while flat) are
    /// rejected; the decision function never emits them, but callers that
    /// replay instruction logs may.
    pub fn apply(self, instruction: &TradeInstruction) -> Result<Self, TransitionError> {
        match (self, instruction) {
            (Self::Flat | Self::Closed, TradeInstruction::OpenShort { .. }) => Ok(Self::ShortOpen),
            (Self::ShortOpen, TradeInstruction::CloseAll) => Ok(Self::Closed),
            (state, TradeInstruction::OpenShort { .. }) => Err(TransitionError::AlreadyOpen(state)),
            (state, TradeInstruction::CloseAll) => Err(TransitionError::NothingToClose(state)),
        }
    }
}

/// Rejected lifecycle transition.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot open a short: a position is already open (state {0:?})")]
    AlreadyOpen(PositionStatus),
    #[error("cannot close: no position is open (state {0:?})")]
    NothingToClose(PositionStatus),
}
