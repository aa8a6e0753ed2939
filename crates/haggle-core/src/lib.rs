pub mod config;
pub mod decision;
pub mod output;
pub mod rival;
pub mod session;
pub mod setup;

pub use config::AuctionConfig;
pub use decision::{BidDecision, DecisionReason};
pub use output::{Actor, BarkTrigger, Effect, Intent, LogEntry, Resolution, TurnOutput};
pub use rival::{RivalProfile, RivalState, Strategy};
pub use session::{AuctionSession, Bidder, Outcome};
pub use setup::{AuctionSetup, PlayerSkills};
