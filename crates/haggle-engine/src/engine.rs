//! The auction state machine.
//!
//! `PlayerTurn -> RivalTurn -> PlayerTurn -> ... -> Resolved`. Each
//! transition is synchronous, never blocks, and either mutates the session
//! and returns a [`TurnOutput`] snapshot, or rejects with an
//! [`ActionError`] and changes nothing. The engine never touches the
//! player's persisted money or skills; winning outputs carry intents for
//! the caller to apply.

use crate::barks;
use crate::error::ActionError;
use crate::rival_ai::RivalAi;
use haggle_core::{
    AuctionConfig, AuctionSession, AuctionSetup, BarkTrigger, Bidder, Effect, Intent, LogEntry,
    Outcome, PlayerSkills, Resolution, RivalState, TurnOutput,
};
use rand::Rng;
use tracing::debug;

/// Tactics XP granted for winning an auction.
const XP_PER_WIN: u32 = 10;
/// Tactics XP granted per successful stall.
const XP_PER_STALL: u32 = 2;
/// Inspection XP granted per Kick Tires.
const XP_PER_KICK: u32 = 2;

/// Accumulates one transition's output before the session snapshot is taken.
#[derive(Default)]
struct Turn {
    log: Vec<LogEntry>,
    effects: Vec<Effect>,
    intents: Vec<Intent>,
    needs_rival_turn: bool,
    resolution: Option<Resolution>,
}

/// One encounter's worth of negotiation state: the session, the rival's
/// resources, and a snapshot of the player taken at creation.
pub struct BiddingEngine {
    session: AuctionSession,
    rival: RivalAi,
    config: AuctionConfig,
    player_money: u32,
    player_skills: PlayerSkills,
}

impl BiddingEngine {
    pub fn new(setup: AuctionSetup) -> Self {
        let session = AuctionSession::new(
            setup.car_valuation,
            setup.config.starting_bid_multiplier,
        );
        let rival = RivalAi::new(&setup.rival_profile, setup.interest);
        Self {
            session,
            rival,
            config: setup.config,
            player_money: setup.player_money,
            player_skills: setup.player_skills,
        }
    }

    pub fn session(&self) -> &AuctionSession {
        &self.session
    }

    pub fn rival(&self) -> &RivalState {
        self.rival.state()
    }

    pub fn config(&self) -> &AuctionConfig {
        &self.config
    }

    pub fn player_money(&self) -> u32 {
        self.player_money
    }

    pub fn player_skills(&self) -> PlayerSkills {
        self.player_skills
    }

    /// Where the player's next bid would land, without committing to it.
    pub fn preview_bid(&self, power: bool) -> u32 {
        let raise = if power {
            self.config.power_bid_increment
        } else {
            self.config.bid_increment
        };
        match (!self.session.has_any_bids, power) {
            (true, false) => self.session.opening_bid,
            (true, true) => self.session.opening_bid.saturating_add(raise),
            (false, _) => self.session.current_bid.saturating_add(raise),
        }
    }

    /// Every rejection leaves a debug event behind; state is untouched.
    fn reject(&self, err: ActionError) -> ActionError {
        debug!(code = err.code(), bid = self.session.current_bid, "action rejected");
        err
    }

    fn guard_player_turn(&self) -> Result<(), ActionError> {
        if self.session.is_resolved() {
            return Err(self.reject(ActionError::AlreadyResolved));
        }
        if !self.session.is_player_turn {
            return Err(self.reject(ActionError::InvalidTurn));
        }
        Ok(())
    }

    /// Bid, or power bid. The first bid of the encounter charges the
    /// opening bid; an opening power bid lands the opening bid and the
    /// power raise as two log entries in one call.
    pub fn player_bid(&mut self, power: bool) -> Result<TurnOutput, ActionError> {
        self.guard_player_turn()?;
        let opening = !self.session.has_any_bids;
        let resulting = self.preview_bid(power);
        if resulting > self.player_money {
            return Err(self.reject(ActionError::InsufficientFunds));
        }

        let mut turn = Turn::default();
        if opening {
            self.session.has_any_bids = true;
            self.session.current_bid = self.session.opening_bid;
            self.session.last_bidder = Bidder::Player;
            turn.log.push(LogEntry::player(format!(
                "You open the bidding at ${}.",
                self.session.opening_bid
            )));
        }
        if power {
            self.session.current_bid = resulting;
            self.session.last_bidder = Bidder::Player;
            self.session.power_bid_streak = self.session.power_bid_streak.saturating_add(1);
            turn.log.push(LogEntry::player(format!(
                "You slam down a power bid: ${}!",
                resulting
            )));
            self.rival.on_player_power_bid(
                self.config.power_bid_patience_penalty,
                self.session.power_bid_streak,
            );
            if self.rival.patience() == 0 {
                let message = format!(
                    "{} can't take the pressure and storms off!",
                    self.rival.name()
                );
                self.resolve(
                    &mut turn,
                    Outcome::PlayerWon,
                    message,
                    Some(BarkTrigger::RivalFoldPatience),
                );
                debug!(bid = resulting, "power bid broke the rival");
                return Ok(self.finish(turn));
            }
        } else if !opening {
            self.session.current_bid = resulting;
            self.session.last_bidder = Bidder::Player;
            self.session.power_bid_streak = 0;
            turn.log
                .push(LogEntry::player(format!("You raise to ${}.", resulting)));
        } else {
            self.session.power_bid_streak = 0;
        }
        self.session.is_player_turn = false;
        turn.needs_rival_turn = true;
        debug!(bid = self.session.current_bid, power, "player bid accepted");
        Ok(self.finish(turn))
    }

    /// Knock the rival's budget down by pointing out flaws. Needs an
    /// opening bid on the table and enough inspection skill.
    pub fn player_kick_tires(&mut self) -> Result<TurnOutput, ActionError> {
        self.guard_player_turn()?;
        if !self.session.has_any_bids {
            return Err(self.reject(ActionError::InvalidTurn));
        }
        if self.player_skills.inspection < self.config.required_inspection_level {
            return Err(self.reject(ActionError::SkillTooLow));
        }

        let mut turn = Turn::default();
        self.rival
            .on_player_kick_tires(self.config.kick_tires_budget_reduction);
        turn.log.push(LogEntry::player(
            "You kick the tires and point out every flaw you can find.",
        ));
        turn.effects.push(Effect::Toast {
            message: format!("{}'s budget takes a hit.", self.rival.name()),
        });
        turn.intents.push(Intent::GrantInspectionXp {
            amount: XP_PER_KICK,
        });
        debug!(budget = self.rival.budget(), "kick tires");
        if self.session.current_bid > self.rival.budget() {
            // The reduced budget no longer covers the current price, so
            // whoever holds the bid takes the car.
            if self.session.player_is_winning() {
                let message = format!(
                    "{} can't match the price any more and backs out!",
                    self.rival.name()
                );
                self.resolve(
                    &mut turn,
                    Outcome::PlayerWon,
                    message,
                    Some(BarkTrigger::RivalFoldBudget),
                );
            } else {
                let message = format!(
                    "{} shrugs off the nitpicking and closes the deal.",
                    self.rival.name()
                );
                self.resolve(
                    &mut turn,
                    Outcome::RivalWon,
                    message,
                    Some(BarkTrigger::PlayerLost),
                );
            }
            return Ok(self.finish(turn));
        }
        self.session.power_bid_streak = 0;
        self.session.is_player_turn = false;
        turn.needs_rival_turn = true;
        Ok(self.finish(turn))
    }

    /// Burn the rival's patience by wasting time. Capped per auction at
    /// the player's tactics skill level.
    pub fn player_stall(&mut self) -> Result<TurnOutput, ActionError> {
        self.guard_player_turn()?;
        if !self.session.has_any_bids {
            return Err(self.reject(ActionError::InvalidTurn));
        }
        if self.player_skills.tactics < self.config.required_tactics_level {
            return Err(self.reject(ActionError::SkillTooLow));
        }
        if self.session.stall_uses >= self.player_skills.tactics {
            return Err(self.reject(ActionError::NoTacticUsesRemaining));
        }

        let mut turn = Turn::default();
        self.session.stall_uses += 1;
        self.session.power_bid_streak = 0;
        self.rival.on_player_stall(self.config.stall_patience_penalty);
        turn.log.push(LogEntry::player(
            "You stall for time, suddenly very interested in the paperwork.",
        ));
        turn.intents.push(Intent::GrantTacticsXp {
            amount: XP_PER_STALL,
        });
        debug!(
            patience = self.rival.patience(),
            uses = self.session.stall_uses,
            "stall"
        );
        if self.rival.patience() == 0 {
            if self.session.player_is_winning() {
                let message = format!("{} gets fed up with waiting and leaves!", self.rival.name());
                self.resolve(
                    &mut turn,
                    Outcome::PlayerWon,
                    message,
                    Some(BarkTrigger::RivalFoldPatience),
                );
            } else {
                let message = format!("{} is done waiting and takes the car.", self.rival.name());
                self.resolve(
                    &mut turn,
                    Outcome::RivalWon,
                    message,
                    Some(BarkTrigger::PlayerLost),
                );
            }
            return Ok(self.finish(turn));
        }
        self.session.is_player_turn = false;
        turn.needs_rival_turn = true;
        Ok(self.finish(turn))
    }

    /// Walk away. Terminal, ignores whose turn it is, and a second call
    /// is an `AlreadyResolved` no-op.
    pub fn player_quit(&mut self) -> Result<TurnOutput, ActionError> {
        if self.session.is_resolved() {
            return Err(self.reject(ActionError::AlreadyResolved));
        }
        let mut turn = Turn::default();
        turn.log.push(LogEntry::player("You walk away from the deal."));
        self.resolve(
            &mut turn,
            Outcome::RivalWon,
            "You walked away from the negotiation.".to_string(),
            Some(BarkTrigger::PlayerLost),
        );
        debug!("player quit");
        Ok(self.finish(turn))
    }

    /// Let the rival take their turn. Holding and folding are different
    /// endings: a rival that is already highest and stops raising wins the
    /// car without any fold narration.
    pub fn rival_turn(&mut self, rng: &mut impl Rng) -> Result<TurnOutput, ActionError> {
        if self.session.is_resolved() {
            return Err(self.reject(ActionError::AlreadyResolved));
        }
        if self.session.is_player_turn {
            return Err(self.reject(ActionError::InvalidTurn));
        }

        let mut turn = Turn::default();
        let decision =
            self.rival
                .decide_bid(self.session.current_bid, self.config.bid_increment, rng);
        debug!(
            should_bid = decision.should_bid,
            reason = ?decision.reason,
            patience = self.rival.patience(),
            "rival decision"
        );
        if !decision.should_bid {
            if self.session.last_bidder == Bidder::Rival {
                let message = format!(
                    "{} holds the high bid at ${}.",
                    self.rival.name(),
                    self.session.current_bid
                );
                self.resolve(&mut turn, Outcome::RivalWon, message, None);
            } else {
                turn.log.push(LogEntry::rival(format!(
                    "{}: \"{}\"",
                    self.rival.name(),
                    decision.reason
                )));
                let message = format!("{} backs out of the bidding!", self.rival.name());
                self.resolve(
                    &mut turn,
                    Outcome::PlayerWon,
                    message,
                    Some(barks::fold_bark(decision.reason)),
                );
            }
            return Ok(self.finish(turn));
        }

        let new_bid = self.session.current_bid.saturating_add(decision.bid_amount);
        self.session.has_any_bids = true;
        self.session.current_bid = new_bid;
        self.session.last_bidder = Bidder::Rival;
        turn.log.push(LogEntry::rival(format!(
            "{} raises to ${}.",
            self.rival.name(),
            new_bid
        )));
        if let Some(line) = barks::pressure_line(self.rival.name(), self.rival.patience()) {
            turn.log.push(LogEntry::rival(line));
            if self.rival.patience() < 20 {
                turn.effects.push(Effect::Bark {
                    trigger: BarkTrigger::RivalPressured,
                });
            }
        }
        self.session.is_player_turn = true;
        Ok(self.finish(turn))
    }

    fn resolve(
        &mut self,
        turn: &mut Turn,
        outcome: Outcome,
        message: String,
        bark: Option<BarkTrigger>,
    ) {
        self.session.outcome = Some(outcome);
        turn.needs_rival_turn = false;
        if outcome.player_won() {
            turn.intents.push(Intent::DebitMoney {
                amount: self.session.current_bid,
            });
            turn.intents.push(Intent::GrantTacticsXp { amount: XP_PER_WIN });
        }
        turn.resolution = Some(Resolution {
            player_won: outcome.player_won(),
            message,
            bark,
        });
    }

    fn finish(&self, turn: Turn) -> TurnOutput {
        TurnOutput {
            session: self.session.clone(),
            log: turn.log,
            effects: turn.effects,
            intents: turn.intents,
            needs_rival_turn: turn.needs_rival_turn,
            resolution: turn.resolution,
        }
    }
}
