//! Batch self-play for balance checks and benchmarks.

pub mod self_play;

pub use self_play::{MatchRecord, PolicyKind, SelfPlayConfig, SelfPlayRunner, SelfPlaySummary};
