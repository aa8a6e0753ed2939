use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the decision table chose what it chose. The fold reasons render as
/// the rival's spoken line when the fold is narrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionReason {
    LostPatience,
    NotWorthIt,
    StillIn,
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionReason::LostPatience => "Lost patience!",
            DecisionReason::NotWorthIt => "Not worth it!",
            DecisionReason::StillIn => "Still in",
        };
        write!(f, "{}", s)
    }
}

/// The sole output of the rival decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidDecision {
    pub should_bid: bool,
    /// Raise amount over the current bid; zero on a fold.
    pub bid_amount: u32,
    pub reason: DecisionReason,
}

impl BidDecision {
    pub fn fold(reason: DecisionReason) -> Self {
        Self {
            should_bid: false,
            bid_amount: 0,
            reason,
        }
    }

    pub fn raise(bid_amount: u32) -> Self {
        Self {
            should_bid: true,
            bid_amount,
            reason: DecisionReason::StillIn,
        }
    }
}
