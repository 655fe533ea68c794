//! Core engine types: seats, RNG, configuration.
//!
//! This module contains the building blocks every other module uses.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{ConfigError, LandingTieBreak, MovementConvention, RulesConfig, TriggerOrder};
pub use player::{Controller, InvalidSeat, PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::GameRng;
