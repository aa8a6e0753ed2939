use haggle_core::{
    AuctionConfig, AuctionSetup, BarkTrigger, Bidder, PlayerSkills, RivalProfile, Strategy,
};
use haggle_engine::{ActionError, BiddingEngine};
use rand::rngs::mock::StepRng;

fn setup(strategy: Strategy, base_patience: i32, budget: u32, interest: i32) -> AuctionSetup {
    AuctionSetup {
        car_valuation: 20000,
        rival_profile: RivalProfile {
            name: "Rex".to_string(),
            strategy,
            base_patience,
            budget,
        },
        interest,
        player_skills: PlayerSkills {
            inspection: 3,
            tactics: 2,
        },
        player_money: 100_000,
        config: AuctionConfig::default(),
    }
}

// Always rolls 0 on the willingness check.
fn rng() -> StepRng {
    StepRng::new(0, 0)
}

/// Reference arc: valuation 20000 at multiplier 0.5 opens at 10000. The
/// Aggressive rival (patience 100, budget 15000, interest 80) raises 1000
/// a turn against the player's 500 until a candidate bid would cross its
/// 15000 budget, then folds "Not worth it!" with the player highest.
#[test]
fn aggressive_rival_runs_out_of_budget() {
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 100, 15000, 80));
    let mut rng = rng();

    let out = engine.player_bid(false).unwrap();
    assert_eq!(out.session.current_bid, 10000);

    let out = engine.rival_turn(&mut rng).unwrap();
    assert_eq!(engine.rival().patience, 85);
    assert_eq!(out.session.current_bid, 11000);
    assert_eq!(out.session.last_bidder, Bidder::Rival);
    assert!(out.resolution.is_none());

    let expected_bids = [11500, 12500, 13000, 14000, 14500];
    let mut seen = Vec::new();
    loop {
        let out = engine.player_bid(false).unwrap();
        seen.push(out.session.current_bid);
        let out = engine.rival_turn(&mut rng).unwrap();
        if let Some(resolution) = out.resolution {
            assert!(resolution.player_won);
            assert_eq!(resolution.bark, Some(BarkTrigger::RivalFoldBudget));
            assert!(out.log.iter().any(|e| e.text.contains("Not worth it!")));
            break;
        }
        seen.push(out.session.current_bid);
    }
    assert_eq!(seen, expected_bids);
    assert_eq!(engine.session().current_bid, 14500);
    assert_eq!(engine.session().last_bidder, Bidder::Player);
}

#[test]
fn current_bid_is_monotonically_non_decreasing() {
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 100, 15000, 80));
    let mut rng = rng();
    let mut bids = vec![0];
    loop {
        if let Ok(out) = engine.player_bid(false) {
            bids.push(out.session.current_bid);
            if out.session.is_resolved() {
                break;
            }
        } else {
            break;
        }
        match engine.rival_turn(&mut rng) {
            Ok(out) => {
                bids.push(out.session.current_bid);
                if out.session.is_resolved() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    assert!(bids.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn rival_patience_is_non_increasing_across_the_encounter() {
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 100, 15000, 80));
    let mut rng = rng();
    let mut patience = vec![engine.rival().patience];
    engine.player_bid(false).unwrap();
    while !engine.session().is_resolved() {
        engine.rival_turn(&mut rng).unwrap();
        patience.push(engine.rival().patience);
        if engine.session().is_resolved() {
            break;
        }
        engine.player_bid(false).unwrap();
        patience.push(engine.rival().patience);
    }
    assert!(patience.windows(2).all(|w| w[0] >= w[1]));
    assert!(*patience.last().unwrap() >= 0);
}

#[test]
fn stall_cap_is_the_tactics_skill_level() {
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 100, 15000, 80));
    let mut rng = rng();
    engine.player_bid(false).unwrap();
    engine.rival_turn(&mut rng).unwrap();
    engine.player_stall().unwrap();
    engine.rival_turn(&mut rng).unwrap();
    let out = engine.player_stall().unwrap();
    assert_eq!(out.session.stall_uses, 2);
    engine.rival_turn(&mut rng).unwrap();

    // Third stall exceeds tactics skill 2: rejected, state untouched.
    let before = engine.session().clone();
    assert_eq!(
        engine.player_stall().unwrap_err(),
        ActionError::NoTacticUsesRemaining
    );
    assert_eq!(engine.session(), &before);
}

#[test]
fn rejected_action_changes_nothing() {
    let mut s = setup(Strategy::Aggressive, 100, 15000, 80);
    s.player_money = 10_400; // opening affordable, the next raise is not
    let mut engine = BiddingEngine::new(s);
    let mut rng = rng();
    engine.player_bid(false).unwrap();
    engine.rival_turn(&mut rng).unwrap();

    let session = engine.session().clone();
    let patience = engine.rival().patience;
    assert_eq!(
        engine.player_bid(false).unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(engine.session(), &session);
    assert_eq!(engine.rival().patience, patience);
    assert_eq!(engine.session().last_bidder, Bidder::Rival);
}

/// A rival that is already highest and declines to raise again is holding,
/// not folding: the auction ends as a rival win with no fold narration.
#[test]
fn holding_rival_wins_without_fold_message() {
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 100, 11000, 80));
    let mut rng = rng();
    engine.player_bid(false).unwrap(); // 10000
    engine.rival_turn(&mut rng).unwrap(); // raises to exactly budget, 11000
    assert_eq!(engine.session().last_bidder, Bidder::Rival);
    engine.player_stall().unwrap();

    let out = engine.rival_turn(&mut rng).unwrap();
    let resolution = out.resolution.expect("hold resolves the auction");
    assert!(!resolution.player_won);
    assert!(resolution.message.contains("holds"));
    assert_eq!(resolution.bark, None);
    assert!(!out.log.iter().any(|e| e.text.contains("Not worth it")));
}

#[test]
fn kick_tires_below_current_bid_resolves_for_the_high_bidder() {
    // Rival raises to its full 11000 budget, then a kick drops the budget
    // to 10000. The rival holds the bid, so the rival takes the car.
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 100, 11000, 80));
    let mut rng = rng();
    engine.player_bid(false).unwrap();
    engine.rival_turn(&mut rng).unwrap();
    assert_eq!(engine.session().current_bid, 11000);

    let out = engine.player_kick_tires().unwrap();
    let resolution = out.resolution.expect("budget no longer covers the bid");
    assert!(!resolution.player_won);
    assert!(!out.needs_rival_turn);
}

#[test]
fn kick_tires_with_headroom_just_flips_the_turn() {
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 100, 15000, 80));
    let mut rng = rng();
    engine.player_bid(false).unwrap();
    engine.rival_turn(&mut rng).unwrap();
    let budget_before = engine.rival().budget;
    let out = engine.player_kick_tires().unwrap();
    assert_eq!(engine.rival().budget, budget_before - 1000);
    assert!(out.resolution.is_none());
    assert!(out.needs_rival_turn);
}

/// Stalling a rival down to zero patience resolves in that same
/// transition, with the winner read off `last_bidder`.
#[test]
fn stall_to_zero_patience_resolves_in_the_same_transition() {
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 30, 15000, 80));
    let mut rng = rng();
    engine.player_bid(false).unwrap();
    engine.rival_turn(&mut rng).unwrap(); // patience 30 -> 15, rival bids
    let out = engine.player_stall().unwrap(); // 15 - 20 floors at 0
    assert_eq!(engine.rival().patience, 0);
    let resolution = out.resolution.expect("patience 0 ends the auction");
    assert!(!resolution.player_won); // rival was holding the high bid
}

/// An opening power bid charges the opening bid plus the power raise and
/// can break the rival in the same call.
#[test]
fn opening_power_bid_can_win_outright() {
    let mut engine = BiddingEngine::new(setup(Strategy::Passive, 10, 15000, 50));
    let out = engine.player_bid(true).unwrap();
    assert_eq!(out.session.current_bid, 11000);
    assert_eq!(out.log.len(), 2);
    assert_eq!(engine.rival().patience, 0);
    let resolution = out.resolution.expect("power bid broke the rival");
    assert!(resolution.player_won);
    assert_eq!(resolution.bark, Some(BarkTrigger::RivalFoldPatience));
}

#[test]
fn power_bid_streak_escalates_and_resets() {
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 100, 50000, 80));
    let mut rng = rng();
    let out = engine.player_bid(true).unwrap();
    assert_eq!(out.session.power_bid_streak, 1);
    assert_eq!(engine.rival().patience, 90); // 10 x streak 1
    engine.rival_turn(&mut rng).unwrap(); // -15 thinking about it
    let out = engine.player_bid(true).unwrap();
    assert_eq!(out.session.power_bid_streak, 2);
    assert_eq!(engine.rival().patience, 55); // 75 - 10 x streak 2
    engine.rival_turn(&mut rng).unwrap();
    let out = engine.player_bid(false).unwrap();
    assert_eq!(out.session.power_bid_streak, 0);
}

#[test]
fn winning_output_carries_settlement_intents() {
    use haggle_core::Intent;
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 100, 11000, 80));
    let mut rng = rng();
    engine.player_bid(false).unwrap();
    engine.rival_turn(&mut rng).unwrap(); // 11000, rival highest
    engine.player_bid(false).unwrap(); // 11500, player highest
    let out = engine.rival_turn(&mut rng).unwrap(); // candidate 12500 > 11000: fold
    let resolution = out.resolution.expect("rival folds over budget");
    assert!(resolution.player_won);
    assert!(out
        .intents
        .contains(&Intent::DebitMoney { amount: 11500 }));
    assert!(out
        .intents
        .iter()
        .any(|i| matches!(i, Intent::GrantTacticsXp { .. })));
}

#[test]
fn transitions_after_resolution_are_safe_no_ops() {
    let mut engine = BiddingEngine::new(setup(Strategy::Aggressive, 100, 15000, 80));
    let mut rng = rng();
    engine.player_quit().unwrap();
    let session = engine.session().clone();
    assert_eq!(
        engine.player_bid(false).unwrap_err(),
        ActionError::AlreadyResolved
    );
    assert_eq!(
        engine.rival_turn(&mut rng).unwrap_err(),
        ActionError::AlreadyResolved
    );
    assert_eq!(
        engine.player_quit().unwrap_err(),
        ActionError::AlreadyResolved
    );
    assert_eq!(engine.session(), &session);
}
