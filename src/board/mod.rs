//! The circular track and catch detection.

pub mod pursuit;
pub mod track;

pub use pursuit::{detect_pursuit, Pursuit};
pub use track::{Heading, Move, Position, Track};
