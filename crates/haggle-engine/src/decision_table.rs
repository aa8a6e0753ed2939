//! Rival bid/fold decisions.
//!
//! Decision stack:
//! 1. Out of patience: fold, `LostPatience`.
//! 2. The candidate raise would push the price past the rival's budget:
//!    fold, `NotWorthIt`.
//! 3. Willingness roll against `patience/2 + interest/2 + strategy bonus`;
//!    a failed roll folds `NotWorthIt`, otherwise bid the raise.
//!
//! The raise is a strategy-scaled multiple of the base increment, so an
//! Aggressive rival with patience 85 and interest 80 bids deterministically
//! for as long as it can afford to.

use haggle_core::{BidDecision, DecisionReason, Strategy};
use rand::Rng;

/// Decide whether the rival outbids `current_bid`, and by how much.
pub fn decide(
    strategy: Strategy,
    patience: i32,
    budget: u32,
    interest: i32,
    current_bid: u32,
    base_increment: u32,
    rng: &mut impl Rng,
) -> BidDecision {
    if patience <= 0 {
        return BidDecision::fold(DecisionReason::LostPatience);
    }

    let raise = base_increment.saturating_mul(strategy.raise_factor(interest));
    let candidate = current_bid.saturating_add(raise);
    if candidate > budget {
        return BidDecision::fold(DecisionReason::NotWorthIt);
    }

    let chance = patience / 2 + interest / 2 + strategy.willingness_bonus(interest);
    if rng.gen_range(0..100) >= chance {
        return BidDecision::fold(DecisionReason::NotWorthIt);
    }

    BidDecision::raise(raise)
}
