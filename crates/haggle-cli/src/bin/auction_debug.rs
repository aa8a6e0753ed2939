/// Replay one auction from a comma-separated action script and print every
/// transition, rejection, and the final resolution.
use clap::{Parser, ValueEnum};
use haggle_cli::format::{format_money, format_output, format_session_line};
use haggle_core::{AuctionConfig, AuctionSetup, PlayerSkills, RivalProfile, Strategy};
use haggle_engine::BiddingEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Aggressive,
    Passive,
    Collector,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Aggressive => Strategy::Aggressive,
            StrategyArg::Passive => Strategy::Passive,
            StrategyArg::Collector => Strategy::Collector,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay one scripted auction")]
struct Args {
    /// Action script: bid, power, kick, stall, quit, rival
    #[arg(default_value = "bid,rival,bid,rival,bid,rival,bid,rival")]
    actions: String,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 20000)]
    valuation: u32,

    #[arg(long, default_value_t = 100000)]
    money: u32,

    #[arg(long, value_enum, default_value_t = StrategyArg::Aggressive)]
    strategy: StrategyArg,

    #[arg(long, default_value_t = 80)]
    interest: i32,

    #[arg(long, default_value_t = 100)]
    patience: i32,

    #[arg(long, default_value_t = 15000)]
    budget: u32,

    #[arg(long, default_value_t = 3)]
    inspection: u8,

    #[arg(long, default_value_t = 3)]
    tactics: u8,

    /// Auction config overrides (YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dump each transition output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Bid,
    Power,
    Kick,
    Stall,
    Quit,
    Rival,
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bid" => Ok(Action::Bid),
            "power" => Ok(Action::Power),
            "kick" => Ok(Action::Kick),
            "stall" => Ok(Action::Stall),
            "quit" => Ok(Action::Quit),
            "rival" => Ok(Action::Rival),
            other => Err(format!("unknown action '{}'", other)),
        }
    }
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

    let setup = AuctionSetup {
        car_valuation: args.valuation,
        rival_profile: RivalProfile {
            name: "Rival".to_string(),
            strategy: args.strategy.into(),
            base_patience: args.patience,
            budget: args.budget,
        },
        interest: args.interest,
        player_skills: PlayerSkills {
            inspection: args.inspection,
            tactics: args.tactics,
        },
        player_money: args.money,
        config,
    };

    let mut engine = BiddingEngine::new(setup);
    let mut rng = StdRng::seed_from_u64(args.seed);
    println!(
        "Valuation {} | opening bid {} | rival patience {} budget {}",
        format_money(engine.session().car_valuation),
        format_money(engine.session().opening_bid),
        engine.rival().patience,
        format_money(engine.rival().budget),
    );

    for action in args.actions.split(',') {
        let action: Action = action.parse()?;
        let result = match action {
            Action::Bid => engine.player_bid(false),
            Action::Power => engine.player_bid(true),
            Action::Kick => engine.player_kick_tires(),
            Action::Stall => engine.player_stall(),
            Action::Quit => engine.player_quit(),
            Action::Rival => engine.rival_turn(&mut rng),
        };
        match result {
            Ok(output) => {
                if args.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&output)
                            .map_err(|e| format!("serialize failed: {}", e))?
                    );
                } else {
                    print!("{}", format_output(&output));
                    println!("   | {}", format_session_line(&output));
                }
                if let Some(resolution) = &output.resolution {
                    println!(
                        "=== {}: {}",
                        if resolution.player_won {
                            "YOU WIN"
                        } else {
                            "YOU LOSE"
                        },
                        resolution.message
                    );
                    break;
                }
            }
            Err(err) => {
                println!("   ! {:?} rejected: {} ({})", action, err, err.code());
            }
        }
    }

    if !engine.session().is_resolved() {
        println!(
            "auction still open at {} (patience {}, budget {})",
            format_money(engine.session().current_bid),
            engine.rival().patience,
            format_money(engine.rival().budget),
        );
    }
    Ok(())
}
