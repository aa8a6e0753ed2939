/// Pit every scripted player policy against every rival strategy over a
/// batch of seeded auctions and print a win-rate table.
use clap::Parser;
use haggle_cli::format::format_money;
use haggle_cli::policy::{PlayerAction, Policy};
use haggle_core::{AuctionConfig, AuctionSetup, PlayerSkills, RivalProfile, Strategy};
use haggle_engine::{ActionError, BiddingEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fight scripted player policies against rival strategies"
)]
struct Args {
    /// Auctions per policy/strategy pairing
    #[arg(short, long, default_value_t = 200)]
    auctions: u32,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Auction config overrides (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
}

struct PairingStats {
    wins: u32,
    total: u32,
    total_price_paid: u64,
}

fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Aggressive => "aggressive",
        Strategy::Passive => "passive",
        Strategy::Collector => "collector",
    }
}

fn run_auction(
    policy: Policy,
    strategy: Strategy,
    config: &AuctionConfig,
    rng: &mut StdRng,
) -> (bool, u32) {
    let valuation = rng.gen_range(8_000..=40_000u32);
    let budget = rng.gen_range(valuation / 2..=valuation + valuation / 2);
    let setup = AuctionSetup {
        car_valuation: valuation,
        rival_profile: RivalProfile {
            name: "Rival".to_string(),
            strategy,
            base_patience: rng.gen_range(60..=100),
            budget,
        },
        interest: rng.gen_range(20..=100),
        player_skills: PlayerSkills {
            inspection: 3,
            tactics: 3,
        },
        player_money: 60_000,
        config: config.clone(),
    };
    let mut engine = BiddingEngine::new(setup);

    // Safety cap; patience depletion guarantees termination long before it.
    for _ in 0..200 {
        let action = policy.next_action(&engine);
        let result = match action {
            PlayerAction::Bid { power } => engine.player_bid(power),
            PlayerAction::KickTires => engine.player_kick_tires(),
            PlayerAction::Stall => engine.player_stall(),
            PlayerAction::Quit => engine.player_quit(),
        };
        let output = match result {
            Ok(output) => output,
            // A rejected tactic falls back to walking away.
            Err(ActionError::AlreadyResolved) => break,
            Err(_) => match engine.player_quit() {
                Ok(output) => output,
                Err(_) => break,
            },
        };
        if let Some(resolution) = &output.resolution {
            return (resolution.player_won, output.session.current_bid);
        }
        if output.needs_rival_turn {
            match engine.rival_turn(rng) {
                Ok(output) => {
                    if let Some(resolution) = &output.resolution {
                        return (resolution.player_won, output.session.current_bid);
                    }
                }
                Err(_) => break,
            }
        }
    }
    (false, engine.session().current_bid)
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            AuctionConfig::from_yaml(&contents).map_err(|e| format!("bad config: {}", e))?
        }
        None => AuctionConfig::default(),
    };

    println!(
        "{:<14} {:<12} {:>6} {:>7} {:>12}",
        "policy", "strategy", "wins", "win%", "avg price"
    );
    for policy in Policy::ALL {
        for strategy in Strategy::ALL {
            let mut rng = StdRng::seed_from_u64(args.seed);
            let mut stats = PairingStats {
                wins: 0,
                total: 0,
                total_price_paid: 0,
            };
            for _ in 0..args.auctions {
                let (won, price) = run_auction(policy, strategy, &config, &mut rng);
                stats.total += 1;
                if won {
                    stats.wins += 1;
                    stats.total_price_paid += price as u64;
                }
            }
            let win_rate = 100.0 * stats.wins as f64 / stats.total.max(1) as f64;
            let avg_price = if stats.wins > 0 {
                format_money((stats.total_price_paid / stats.wins as u64) as u32)
            } else {
                "-".to_string()
            };
            println!(
                "{:<14} {:<12} {:>6} {:>6.1}% {:>12}",
                policy.name(),
                strategy_name(strategy),
                stats.wins,
                win_rate,
                avg_price
            );
        }
    }
    Ok(())
}
