//! Round resolution and match outcomes.
//!
//! Resolution is a pure function of the round's acquisitions and the
//! board. The game layer calls into it after each choice and never
//! interprets win/lose conditions itself.

pub mod outcome;
pub mod resolve;

pub use outcome::{EndReason, Outcome};
pub use resolve::{
    clockwise_distances, instant_outcome, resolve_round, stalemate_outcome, RoundInput,
    RoundResolution,
};
