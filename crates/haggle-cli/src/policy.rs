//! Scripted player policies for the fight bin. Each policy is a pure
//! function of the visible engine state, so fights are reproducible.

use haggle_engine::BiddingEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Bid { power: bool },
    KickTires,
    Stall,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Plain bids until the money runs out.
    Steady,
    /// Power bids whenever affordable.
    PowerHitter,
    /// Burns every stall before going back to plain bids.
    Tactician,
    /// Kicks tires at every opportunity once the price moves.
    Inspector,
}

impl Policy {
    pub const ALL: [Policy; 4] = [
        Policy::Steady,
        Policy::PowerHitter,
        Policy::Tactician,
        Policy::Inspector,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Policy::Steady => "steady",
            Policy::PowerHitter => "power-hitter",
            Policy::Tactician => "tactician",
            Policy::Inspector => "inspector",
        }
    }

    pub fn next_action(self, engine: &BiddingEngine) -> PlayerAction {
        let session = engine.session();
        let skills = engine.player_skills();
        let config = engine.config();
        let money = engine.player_money();
        let can_bid = engine.preview_bid(false) <= money;
        let can_power = engine.preview_bid(true) <= money;
        let can_stall = session.has_any_bids
            && skills.tactics >= config.required_tactics_level
            && session.stall_uses < skills.tactics;
        let can_kick =
            session.has_any_bids && skills.inspection >= config.required_inspection_level;

        match self {
            Policy::Steady => {
                if can_bid {
                    PlayerAction::Bid { power: false }
                } else {
                    PlayerAction::Quit
                }
            }
            Policy::PowerHitter => {
                if can_power {
                    PlayerAction::Bid { power: true }
                } else if can_bid {
                    PlayerAction::Bid { power: false }
                } else {
                    PlayerAction::Quit
                }
            }
            Policy::Tactician => {
                if can_stall {
                    PlayerAction::Stall
                } else if can_bid {
                    PlayerAction::Bid { power: false }
                } else {
                    PlayerAction::Quit
                }
            }
            Policy::Inspector => {
                if can_kick && session.current_bid > session.opening_bid {
                    PlayerAction::KickTires
                } else if can_bid {
                    PlayerAction::Bid { power: false }
                } else {
                    PlayerAction::Quit
                }
            }
        }
    }
}
