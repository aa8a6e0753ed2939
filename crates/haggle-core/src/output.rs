//! The transition-output contract between the engine and whatever renders
//! it. The engine returns log entries, presentation effects, and intents
//! against the player's persisted state; it never pushes events or writes
//! player money/XP itself.

use crate::session::AuctionSession;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    Player,
    Rival,
}

/// One line of the on-screen auction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
    pub actor: Actor,
}

impl LogEntry {
    pub fn player(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            actor: Actor::Player,
        }
    }

    pub fn rival(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            actor: Actor::Rival,
        }
    }
}

/// Presentation-layer cue ids. The engine only picks the trigger; the
/// renderer owns the actual lines and timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarkTrigger {
    RivalFoldPatience,
    RivalFoldBudget,
    RivalPressured,
    PlayerWon,
    PlayerLost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    Bark { trigger: BarkTrigger },
    Toast { message: String },
}

/// A requested mutation of the player's persisted state. The caller applies
/// these atomically when it accepts the transition output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    DebitMoney { amount: u32 },
    GrantTacticsXp { amount: u32 },
    GrantInspectionXp { amount: u32 },
}

/// Terminal result of the encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub player_won: bool,
    pub message: String,
    pub bark: Option<BarkTrigger>,
}

/// What one accepted transition produced. `session` is a fresh snapshot;
/// the engine keeps its own copy, so the renderer can hold this one
/// without aliasing engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutput {
    pub session: AuctionSession,
    pub log: Vec<LogEntry>,
    pub effects: Vec<Effect>,
    pub intents: Vec<Intent>,
    /// The player's move left the rival on the clock; the caller decides
    /// when (not whether) to ask for the rival's turn.
    pub needs_rival_turn: bool,
    pub resolution: Option<Resolution>,
}
