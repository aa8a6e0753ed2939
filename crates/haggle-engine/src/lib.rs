//! The auction negotiation engine: a turn-based bidding state machine
//! between the player and one rival, driven by depleting patience/budget
//! resources and skill-gated tactics.
//!
//! The engine is synchronous and single-threaded. Every transition either
//! returns a [`TurnOutput`](haggle_core::TurnOutput) describing the new
//! state, or an [`ActionError`] reason code with state untouched. All
//! randomness comes in through the caller's RNG.

pub mod barks;
pub mod decision_table;
pub mod engine;
pub mod error;
pub mod rival_ai;

pub use engine::BiddingEngine;
pub use error::ActionError;
pub use rival_ai::RivalAi;
