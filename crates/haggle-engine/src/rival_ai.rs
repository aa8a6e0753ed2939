//! Per-encounter rival resource tracking around the decision table.

use crate::decision_table;
use haggle_core::{BidDecision, RivalProfile, RivalState};
use rand::Rng;

/// Owns one rival's patience and budget for the length of an encounter and
/// applies the reactive penalties player tactics inflict on them.
#[derive(Debug, Clone)]
pub struct RivalAi {
    state: RivalState,
}

impl RivalAi {
    pub fn new(profile: &RivalProfile, interest: i32) -> Self {
        Self {
            state: RivalState::from_profile(profile, interest),
        }
    }

    /// Spend a turn deciding whether to outbid `current_bid`.
    ///
    /// Thinking about the price costs patience first (strategy-dependent),
    /// then the decision table runs against the updated resources.
    pub fn decide_bid(
        &mut self,
        current_bid: u32,
        base_increment: u32,
        rng: &mut impl Rng,
    ) -> BidDecision {
        let drain = self.state.strategy.patience_drain(self.state.interest);
        self.state.drain_patience(drain);
        decision_table::decide(
            self.state.strategy,
            self.state.patience,
            self.state.budget,
            self.state.interest,
            current_bid,
            base_increment,
            rng,
        )
    }

    pub fn on_player_stall(&mut self, penalty: i32) {
        self.state.drain_patience(penalty);
    }

    pub fn on_player_kick_tires(&mut self, reduction: u32) {
        self.state.reduce_budget(reduction);
    }

    /// Power bids rattle the rival immediately, harder with each
    /// consecutive one.
    pub fn on_player_power_bid(&mut self, penalty: i32, streak: u8) {
        self.state.drain_patience(penalty.saturating_mul(streak as i32));
    }

    pub fn patience(&self) -> i32 {
        self.state.patience
    }

    pub fn budget(&self) -> u32 {
        self.state.budget
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn state(&self) -> &RivalState {
        &self.state
    }
}
