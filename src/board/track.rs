//! Circular track arithmetic.
//!
//! Positions are 1-based and wrap: on a 14-space track, one step
//! clockwise from 14 is 1 and one step counter-clockwise from 1 is 14.

use serde::{Deserialize, Serialize};

use crate::core::{MovementConvention, PlayerId};

/// A space on the track, always in `1..=size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u8);

impl Position {
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rotational sense in which positive movement advances a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Clockwise,
    CounterClockwise,
}

impl Heading {
    /// Multiplier applied to a card's step count.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Heading::Clockwise => 1,
            Heading::CounterClockwise => -1,
        }
    }

    /// Heading of a seat under a direction convention.
    #[must_use]
    pub fn for_seat(convention: MovementConvention, player: PlayerId) -> Self {
        match (convention, player.index()) {
            (MovementConvention::Converging, 1) => Heading::CounterClockwise,
            _ => Heading::Clockwise,
        }
    }
}

/// One seat's movement in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// Signed track displacement (positive = clockwise).
    pub displacement: i32,
}

impl Move {
    /// Number of spaces stepped through.
    #[must_use]
    pub fn magnitude(&self) -> u32 {
        self.displacement.unsigned_abs()
    }
}

/// Circular track of `size` positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    size: u8,
}

impl Track {
    /// Create a track. Sizes below 2 are rejected by `RulesConfig::validate`.
    #[must_use]
    pub fn new(size: u8) -> Self {
        Self { size: size.max(1) }
    }

    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        (1..=self.size).contains(&position.0)
    }

    /// Map any integer onto the track.
    #[must_use]
    pub fn wrap(&self, raw: i64) -> Position {
        let size = i64::from(self.size);
        Position(((raw - 1).rem_euclid(size) + 1) as u8)
    }

    /// Position after moving `displacement` spaces (positive = clockwise).
    #[must_use]
    pub fn advance(&self, from: Position, displacement: i32) -> Position {
        self.wrap(i64::from(from.0) + i64::from(displacement))
    }

    /// Apply a displacement and record it as a `Move`.
    #[must_use]
    pub fn step(&self, from: Position, displacement: i32) -> Move {
        Move {
            from,
            to: self.advance(from, displacement),
            displacement,
        }
    }

    /// Every position occupied during a move: the start, each space
    /// stepped through, and the destination.
    #[must_use]
    pub fn path(&self, mv: &Move) -> Vec<Position> {
        let sign = i64::from(mv.displacement.signum());
        (0..=i64::from(mv.magnitude()))
            .map(|k| self.wrap(i64::from(mv.from.0) + sign * k))
            .collect()
    }

    /// Steps clockwise from `from` to `to`, in `0..size`.
    #[must_use]
    pub fn forward_distance(&self, from: Position, to: Position) -> u8 {
        (i16::from(to.0) - i16::from(from.0)).rem_euclid(i16::from(self.size)) as u8
    }

    /// Steps a seat heading `heading` must travel from `from` to reach `to`.
    #[must_use]
    pub fn chase_distance(&self, from: Position, to: Position, heading: Heading) -> u8 {
        match heading {
            Heading::Clockwise => self.forward_distance(from, to),
            Heading::CounterClockwise => self.forward_distance(to, from),
        }
    }
}
