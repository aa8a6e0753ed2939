use thiserror::Error;

/// Why a player action was rejected. None of these are fatal: the engine
/// leaves state untouched and the message is suitable for direct display.
///
/// `InvalidTurn` and `AlreadyResolved` mean the caller is out of sync with
/// the engine (a stale click, usually) and should be dropped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("You can't afford that bid.")]
    InsufficientFunds,
    #[error("Your skill isn't high enough for that tactic.")]
    SkillTooLow,
    #[error("You've stalled as much as you can this auction.")]
    NoTacticUsesRemaining,
    #[error("It isn't your turn.")]
    InvalidTurn,
    #[error("This auction is already settled.")]
    AlreadyResolved,
}

impl ActionError {
    /// Stable machine-readable code for logs and test fixtures.
    pub fn code(self) -> &'static str {
        match self {
            ActionError::InsufficientFunds => "insufficient_funds",
            ActionError::SkillTooLow => "skill_too_low",
            ActionError::NoTacticUsesRemaining => "no_tactic_uses_remaining",
            ActionError::InvalidTurn => "invalid_turn",
            ActionError::AlreadyResolved => "already_resolved",
        }
    }

    /// Whether the presentation layer should swallow this without a message.
    pub fn is_silent(self) -> bool {
        matches!(self, ActionError::InvalidTurn | ActionError::AlreadyResolved)
    }
}
