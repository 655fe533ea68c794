//! Turn phases of a match.
//!
//! ```text
//! ProposalPending(active) --propose--> AwaitingChoice(active, offer)
//!        ^                                     |
//!        |                                   choose
//!        +------- advance (not terminal) ------+
//!                                              |
//!                                         GameOver(outcome)
//! ```
//!
//! Resolution runs inside the `choose` transition and is never observed
//! as a phase of its own.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::Outcome;

/// Which card of an offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    FaceUp,
    FaceDown,
}

impl Slot {
    /// The other slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Slot::FaceUp => Slot::FaceDown,
            Slot::FaceDown => Slot::FaceUp,
        }
    }
}

/// Two cards put on the table by the proposer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub face_up: Card,
    pub face_down: Card,
}

impl Offer {
    #[must_use]
    pub fn new(face_up: Card, face_down: Card) -> Self {
        Self { face_up, face_down }
    }

    /// Card in a slot.
    #[must_use]
    pub fn card(&self, slot: Slot) -> Card {
        match slot {
            Slot::FaceUp => self.face_up,
            Slot::FaceDown => self.face_down,
        }
    }
}

/// Where a match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// `active` must propose a pair.
    ProposalPending { active: PlayerId },
    /// `active` has proposed; the opponent must take one card.
    AwaitingChoice { active: PlayerId, offer: Offer },
    /// Terminal.
    GameOver(Outcome),
}

impl Phase {
    /// Seat that proposed (or must propose) this half-round.
    #[must_use]
    pub fn active(&self) -> Option<PlayerId> {
        match self {
            Phase::ProposalPending { active } | Phase::AwaitingChoice { active, .. } => Some(*active),
            Phase::GameOver(_) => None,
        }
    }

    /// Seat whose decision the match is waiting on.
    #[must_use]
    pub fn to_act(&self) -> Option<PlayerId> {
        match self {
            Phase::ProposalPending { active } => Some(*active),
            Phase::AwaitingChoice { active, .. } => Some(active.opponent()),
            Phase::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn offer(&self) -> Option<&Offer> {
        match self {
            Phase::AwaitingChoice { offer, .. } => Some(offer),
            _ => None,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}
