//! # chase-on
//!
//! Engine and heuristic AI for a two-player spy pursuit card game.
//!
//! Two spies share a circular track. Each half-round the active player
//! offers two cards of different types, one face-up and one face-down;
//! the opponent takes one and the proposer recruits the other. A
//! recruited card moves its owner by an amount that depends on how many
//! copies of that type the owner already holds. A match ends when one
//! spy catches the other, when a third Codebreaker or Daredevil is
//! recruited, or when the deck runs dry.
//!
//! ## Design Principles
//!
//! 1. **Versioned snapshots**: every transition returns a new
//!    `MatchState`; nothing is mutated behind the caller's back.
//!
//! 2. **Injected randomness**: shuffles, coin flips and AI noise all draw
//!    from a seeded `GameRng`, so any match replays from its seed.
//!
//! 3. **Named rule variants**: direction convention, landing tie-break and
//!    trigger order are explicit `RulesConfig` choices.
//!
//! ## Modules
//!
//! - `core`: seats, per-seat maps, RNG, rules configuration
//! - `cards`: catalog, deck, hand, collection
//! - `board`: track arithmetic and catch detection
//! - `rules`: round resolution and outcomes
//! - `game`: turn state machine, intents, events, sessions
//! - `ai`: card scoring, heuristic AI, policies
//! - `sim`: batch self-play

pub mod ai;
pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Controller, GameRng, InvalidSeat, LandingTieBreak, MovementConvention,
    PlayerId, PlayerMap, RulesConfig, TriggerOrder,
};

pub use crate::cards::{
    Acquisition, Card, CardId, CardType, CatalogError, Collection, Deck, Hand, Movement,
};

pub use crate::board::{Heading, Move, Position, Pursuit, Track};

pub use crate::rules::{EndReason, Outcome};

pub use crate::game::{
    Engine, Event, Intent, IntentError, MatchState, Offer, Phase, PlayerView, Proposal, Seat,
    Session, Slot, Transition,
};

pub use crate::ai::{AiConfig, HeuristicAi, Policy, RandomPolicy};

pub use crate::sim::{MatchRecord, SelfPlayConfig, SelfPlayRunner, SelfPlaySummary};
