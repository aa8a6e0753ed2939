use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is currently holding the high bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bidder {
    None,
    Player,
    Rival,
}

impl fmt::Display for Bidder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Bidder::None => "nobody",
            Bidder::Player => "player",
            Bidder::Rival => "rival",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWon,
    RivalWon,
}

impl Outcome {
    pub fn player_won(self) -> bool {
        self == Outcome::PlayerWon
    }
}

/// One negotiation encounter. Created alongside the rival's state when the
/// encounter begins and discarded once resolved; never reused.
///
/// `current_bid` only changes through an accepted bid, and `last_bidder`
/// always names the party whose action most recently produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionSession {
    /// Appraised value of the car, computed once by the valuation
    /// collaborator. Immutable for the life of the session.
    pub car_valuation: u32,
    /// `floor(car_valuation * starting_bid_multiplier)`, kept for display.
    pub opening_bid: u32,
    pub current_bid: u32,
    /// False until the opening bid lands.
    pub has_any_bids: bool,
    pub last_bidder: Bidder,
    /// Bounded by the player's tactics skill level at time of use.
    pub stall_uses: u8,
    /// Consecutive power bids; resets on any non-power action.
    pub power_bid_streak: u8,
    pub is_player_turn: bool,
    pub outcome: Option<Outcome>,
}

impl AuctionSession {
    pub fn new(car_valuation: u32, starting_bid_multiplier: f64) -> Self {
        let opening_bid = (car_valuation as f64 * starting_bid_multiplier).floor() as u32;
        Self {
            car_valuation,
            opening_bid,
            current_bid: 0,
            has_any_bids: false,
            last_bidder: Bidder::None,
            stall_uses: 0,
            power_bid_streak: 0,
            is_player_turn: true,
            outcome: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn player_is_winning(&self) -> bool {
        self.last_bidder == Bidder::Player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_bid_floors() {
        let session = AuctionSession::new(20000, 0.5);
        assert_eq!(session.opening_bid, 10000);
        let session = AuctionSession::new(9999, 0.5);
        assert_eq!(session.opening_bid, 4999);
    }

    #[test]
    fn test_fresh_session_state() {
        let session = AuctionSession::new(20000, 0.5);
        assert_eq!(session.current_bid, 0);
        assert!(!session.has_any_bids);
        assert_eq!(session.last_bidder, Bidder::None);
        assert!(session.is_player_turn);
        assert!(!session.is_resolved());
    }
}
