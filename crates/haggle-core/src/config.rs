use serde::{Deserialize, Serialize};

/// Tunables for the negotiation engine. All fields default, so a config
/// file only needs to name the values it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionConfig {
    /// Raise applied by a plain player bid, and the base unit the rival's
    /// raises are scaled from.
    pub bid_increment: u32,
    /// Raise applied by a power bid.
    pub power_bid_increment: u32,
    /// Rival patience lost per power bid, multiplied by the current streak.
    pub power_bid_patience_penalty: i32,
    /// Rival patience lost when the player stalls.
    pub stall_patience_penalty: i32,
    /// Rival budget knocked off by one Kick Tires.
    pub kick_tires_budget_reduction: u32,
    /// Minimum inspection skill for Kick Tires.
    pub required_inspection_level: u8,
    /// Minimum tactics skill for Stall.
    pub required_tactics_level: u8,
    /// Fraction of the car's valuation the opening bid starts at.
    pub starting_bid_multiplier: f64,
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            bid_increment: 500,
            power_bid_increment: 1000,
            power_bid_patience_penalty: 10,
            stall_patience_penalty: 20,
            kick_tires_budget_reduction: 1000,
            required_inspection_level: 1,
            required_tactics_level: 1,
            starting_bid_multiplier: 0.5,
        }
    }
}

impl AuctionConfig {
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }
}
