use crate::config::AuctionConfig;
use crate::rival::RivalProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub inspection: u8,
    pub tactics: u8,
}

/// Everything the engine needs to start an encounter. The caller supplies
/// a snapshot of the player and the already-computed car valuation; the
/// engine never reaches back into game state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionSetup {
    pub car_valuation: u32,
    pub rival_profile: RivalProfile,
    /// The rival's affinity for this particular car, derived from its tags.
    pub interest: i32,
    pub player_skills: PlayerSkills,
    pub player_money: u32,
    #[serde(default)]
    pub config: AuctionConfig,
}
