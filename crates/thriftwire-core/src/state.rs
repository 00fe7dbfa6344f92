//! Transport open/closed state

use serde::{Deserialize, Serialize};

/// Connection state of a transport
///
/// State transitions:
/// ```text
/// Closed ──open──▶ Open
///   ▲               │
///   └─────close─────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportState {
    /// No channel is established; only `open` and `is_open` are meaningful
    #[default]
    Closed,
    /// The channel is usable for reads and writes
    Open,
}

impl TransportState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: TransportState) -> bool {
        matches!(
            (self, target),
            (TransportState::Closed, TransportState::Open)
                | (TransportState::Open, TransportState::Closed)
        )
    }

    /// Check if reads and writes are allowed in this state
    pub fn is_open(&self) -> bool {
        matches!(self, TransportState::Open)
    }
}

impl std::fmt::Display for TransportState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportState::Closed => write!(f, "Closed"),
            TransportState::Open => write!(f, "Open"),
        }
    }
}

#[cfg(test)]
#[path = "state/state_tests.rs"]
mod state_tests;
