//! AI decision making.
//!
//! - `scoring`: pure card and pair evaluation
//! - `heuristic`: the scoring-driven AI with choice noise and bluffing
//! - `policy`: the `Policy` seam used by sessions and self-play

pub mod config;
pub mod heuristic;
pub mod policy;
pub mod scoring;

pub use config::AiConfig;
pub use heuristic::HeuristicAi;
pub use policy::{Policy, RandomPolicy};
pub use scoring::{
    evaluate_card_for_ai, evaluate_card_for_player, evaluate_pair, expected_movement, Perspective,
};
