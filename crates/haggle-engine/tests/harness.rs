//! Scripted auction scenarios loaded from `tests/scenarios.yaml`.
//!
//! Each scenario seeds the RNG, replays a fixed action script, and checks
//! the resolved outcome. Failures are accumulated so one bad scenario
//! doesn't hide the rest.

use haggle_core::AuctionSetup;
use haggle_engine::BiddingEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ActionName {
    Bid,
    PowerBid,
    KickTires,
    Stall,
    Quit,
    Rival,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Step {
    Simple(ActionName),
    Rejected { action: ActionName, rejected: String },
}

#[derive(Debug, Default, Deserialize)]
struct Expect {
    resolved: Option<bool>,
    player_won: Option<bool>,
    final_bid: Option<u32>,
    stall_uses: Option<u8>,
    message_contains: Option<String>,
    log_contains: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    seed: u64,
    setup: AuctionSetup,
    script: Vec<Step>,
    expect: Expect,
}

#[test]
fn run_scripted_scenarios() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/scenarios.yaml");
    let contents = fs::read_to_string(path).expect("failed to read scenarios.yaml");
    let scenarios: Vec<Scenario> = serde_yaml::from_str(&contents).expect("invalid scenario yaml");
    assert!(!scenarios.is_empty());

    let mut failures = Vec::new();
    for scenario in &scenarios {
        if let Err(msg) = run_scenario(scenario) {
            failures.push(format!("{}: {}", scenario.name, msg));
        }
    }
    assert!(
        failures.is_empty(),
        "{} scenario(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

fn run_scenario(scenario: &Scenario) -> Result<(), String> {
    let mut engine = BiddingEngine::new(scenario.setup.clone());
    let mut rng = StdRng::seed_from_u64(scenario.seed);
    let mut all_log = Vec::new();
    let mut resolution = None;

    for (i, step) in scenario.script.iter().enumerate() {
        let (action, expected_rejection) = match step {
            Step::Simple(a) => (*a, None),
            Step::Rejected { action, rejected } => (*action, Some(rejected.as_str())),
        };
        let result = match action {
            ActionName::Bid => engine.player_bid(false),
            ActionName::PowerBid => engine.player_bid(true),
            ActionName::KickTires => engine.player_kick_tires(),
            ActionName::Stall => engine.player_stall(),
            ActionName::Quit => engine.player_quit(),
            ActionName::Rival => engine.rival_turn(&mut rng),
        };
        match (result, expected_rejection) {
            (Ok(out), None) => {
                all_log.extend(out.log.iter().map(|e| e.text.clone()));
                if let Some(r) = out.resolution {
                    resolution = Some(r);
                }
            }
            (Ok(_), Some(code)) => {
                return Err(format!(
                    "step {}: expected rejection '{}' but the action was accepted",
                    i, code
                ));
            }
            (Err(e), Some(code)) => {
                if e.code() != code {
                    return Err(format!(
                        "step {}: expected rejection '{}', got '{}'",
                        i,
                        code,
                        e.code()
                    ));
                }
            }
            (Err(e), None) => {
                return Err(format!("step {}: unexpected rejection '{}'", i, e.code()));
            }
        }
    }

    let expect = &scenario.expect;
    if let Some(resolved) = expect.resolved {
        if engine.session().is_resolved() != resolved {
            return Err(format!(
                "expected resolved={}, got {}",
                resolved,
                engine.session().is_resolved()
            ));
        }
    }
    if let Some(player_won) = expect.player_won {
        match &resolution {
            Some(r) if r.player_won == player_won => {}
            Some(r) => {
                return Err(format!(
                    "expected player_won={}, got {} ({})",
                    player_won, r.player_won, r.message
                ));
            }
            None => return Err("expected a resolution, auction still open".to_string()),
        }
    }
    if let Some(final_bid) = expect.final_bid {
        if engine.session().current_bid != final_bid {
            return Err(format!(
                "expected final bid {}, got {}",
                final_bid,
                engine.session().current_bid
            ));
        }
    }
    if let Some(stall_uses) = expect.stall_uses {
        if engine.session().stall_uses != stall_uses {
            return Err(format!(
                "expected {} stall uses, got {}",
                stall_uses,
                engine.session().stall_uses
            ));
        }
    }
    if let Some(needle) = &expect.message_contains {
        match &resolution {
            Some(r) if r.message.contains(needle) => {}
            Some(r) => {
                return Err(format!(
                    "resolution message '{}' does not contain '{}'",
                    r.message, needle
                ));
            }
            None => return Err("expected a resolution message, auction still open".to_string()),
        }
    }
    if let Some(needle) = &expect.log_contains {
        if !all_log.iter().any(|t| t.contains(needle)) {
            return Err(format!("no log entry contains '{}'", needle));
        }
    }
    Ok(())
}
